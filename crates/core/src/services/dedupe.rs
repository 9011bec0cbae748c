use std::collections::HashSet;

use tracing::info;

use crate::model::FlatEntry;

/// Keep the first row for each `id`, dropping later rows with the same `id`.
pub fn dedupe_entries(mut rows: Vec<FlatEntry>) -> Vec<FlatEntry> {
    let before = rows.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    rows.retain(|row| seen.insert(row.id.clone()));
    info!(kept = rows.len(), dropped = before - rows.len(), "deduplicated rows by id");
    rows
}
