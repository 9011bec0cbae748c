use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decode::decode_cheat_table;
use crate::error::TableResult;
use crate::model::FlatEntry;
use crate::services::{dedupe_entries, flatten_entries};

/// Result of converting one table: counts for reporting plus the final rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Records in the decoded tree.
    pub entry_count: usize,
    /// Top-level records in the decoded tree.
    pub top_level_count: usize,
    /// Rows produced by flattening, before deduplication.
    pub flattened_count: usize,
    pub rows: Vec<FlatEntry>,
}

/// Decode, flatten, and deduplicate a table. Nothing is returned on error.
pub fn convert_table(xml: &str, max_depth: usize) -> TableResult<Conversion> {
    let table = decode_cheat_table(xml)?;
    info!(entries = table.entries.len(), "found top-level cheat entries");

    let flattened = flatten_entries(&table.entries, max_depth)?;
    let flattened_count = flattened.len();
    info!(rows = flattened_count, max_depth, "flattened cheat table");

    let rows = dedupe_entries(flattened);

    Ok(Conversion {
        entry_count: table.entry_count(),
        top_level_count: table.entries.len(),
        flattened_count,
        rows,
    })
}
