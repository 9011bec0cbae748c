use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cetable_core::config::{load_export_config, ExportConfig};
use cetable_core::export::write_csv;
use cetable_core::services::{convert_table, Conversion};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{read_table_source, sha256_file};

/// Metadata persisted next to an export when `--metadata` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportMetadata {
    pub source: String,
    pub source_hash: String,
    pub output: String,
    pub max_depth: usize,
    pub entry_count: usize,
    pub flattened_rows: usize,
    pub exported_rows: usize,
    pub started_at: String,
    pub finished_at: String,
}

/// Outcome of a successful export, for reporting.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub metadata: Option<PathBuf>,
    pub top_level_entries: usize,
    pub flattened_rows: usize,
    pub exported_rows: usize,
}

/// Build the effective export config: file values first, then CLI overrides.
pub fn resolve_export_config(
    config_path: Option<&Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    max_depth: Option<usize>,
    metadata: bool,
) -> Result<ExportConfig> {
    let mut config = match config_path {
        Some(path) => load_export_config(path)?,
        None => ExportConfig::default(),
    };
    if let Some(input) = input {
        config.input = input;
    }
    if let Some(output) = output {
        config.output = output;
    }
    if let Some(depth) = max_depth {
        config.max_depth = depth;
    }
    if metadata {
        config.metadata = true;
    }
    Ok(config)
}

/// Build the sidecar contents for a finished conversion, hashing the source table.
pub fn prepare_export_metadata(
    config: &ExportConfig,
    conversion: &Conversion,
    started_at: String,
) -> Result<ExportMetadata> {
    Ok(ExportMetadata {
        source: config.input.display().to_string(),
        source_hash: sha256_file(&config.input)?,
        output: config.output.display().to_string(),
        max_depth: config.max_depth,
        entry_count: conversion.entry_count,
        flattened_rows: conversion.flattened_count,
        exported_rows: conversion.rows.len(),
        started_at,
        finished_at: Utc::now().to_rfc3339(),
    })
}

/// Convert the configured table and write the CSV export.
///
/// Nothing is written unless decoding, flattening, and deduplication all succeed.
pub fn export_command(config: &ExportConfig) -> Result<ExportSummary> {
    let started_at = Utc::now().to_rfc3339();
    info!("Starting cheat table export");
    info!(path = %config.input.display(), "loading cheat table");

    let xml = read_table_source(&config.input)?;
    let conversion = convert_table(&xml, config.max_depth)?;

    // Everything that can fail is done before the CSV lands; only the sidecar write follows it.
    let sidecar = if config.metadata {
        let meta = prepare_export_metadata(config, &conversion, started_at)?;
        let body = serde_json::to_string_pretty(&meta)
            .context("Failed to serialize export metadata")?;
        Some((config.metadata_path(), body))
    } else {
        None
    };

    write_csv(&conversion.rows, &config.output)?;
    info!(path = %config.output.display(), rows = conversion.rows.len(), "CSV export written");

    let metadata = match sidecar {
        Some((meta_path, body)) => {
            fs::write(&meta_path, body).with_context(|| {
                format!("Failed to write export metadata at {}", meta_path.display())
            })?;
            Some(meta_path)
        }
        None => None,
    };

    let summary = ExportSummary {
        output: config.output.clone(),
        metadata,
        top_level_entries: conversion.top_level_count,
        flattened_rows: conversion.flattened_count,
        exported_rows: conversion.rows.len(),
    };

    println!("Exported cheat table:");
    println!("  Source: {}", config.input.display());
    println!("  Top-level entries: {}", summary.top_level_entries);
    println!("  Rows (flattened): {}", summary.flattened_rows);
    println!("  Rows (exported): {}", summary.exported_rows);
    println!("  CSV: {}", summary.output.display());
    if let Some(meta_path) = &summary.metadata {
        println!("  Metadata: {}", meta_path.display());
    }

    Ok(summary)
}
