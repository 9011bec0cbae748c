//! cetable-core
//!
//! Core library for turning Cheat Engine tables into a flat address export.
//!
//! This crate defines the table model, the markup decoder, the conversion
//! services (address evaluation, offset formatting, flattening, deduplication),
//! the CSV exporter, and export configuration.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends.

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod model;
pub mod services;

pub use error::{TableError, TableResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
