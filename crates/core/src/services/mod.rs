//! Conversion services: address evaluation, offset formatting, tree
//! flattening, deduplication, and the end-to-end pipeline tying them together.

pub mod address;
pub mod dedupe;
pub mod flatten;
pub mod offsets;
pub mod pipeline;

pub use address::evaluate_address;
pub use dedupe::dedupe_entries;
pub use flatten::{flatten_entries, flatten_into, DEFAULT_MAX_DEPTH};
pub use offsets::format_offsets;
pub use pipeline::{convert_table, Conversion};
