//! Depth-bounded flattening of the cheat table tree.
//!
//! Each entry is emitted as its own row. Its direct children are then emitted
//! with the parent's label prepended, and each child is flattened again one
//! level deeper. The second emission of a child shares its `id` with the
//! composite row and is collapsed later by `dedupe_entries`.

use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::model::{CheatEntry, FlatEntry, NOT_AVAILABLE};
use crate::services::address::evaluate_address;
use crate::services::offsets::format_offsets;

/// Default nesting depth below which children are no longer descended into.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Flatten `entries` depth-first, parents before children, siblings in order.
pub fn flatten_entries(entries: &[CheatEntry], max_depth: usize) -> TableResult<Vec<FlatEntry>> {
    let mut out = Vec::new();
    flatten_into(entries, 0, max_depth, &mut out)?;
    debug!(rows = out.len(), max_depth, "flattened cheat entries");
    Ok(out)
}

/// Flatten starting at an explicit `depth`, appending to `out`.
pub fn flatten_into(
    entries: &[CheatEntry],
    depth: usize,
    max_depth: usize,
    out: &mut Vec<FlatEntry>,
) -> TableResult<()> {
    for entry in entries {
        let label = display_label(&entry.description);
        out.push(flat_row(entry, label.clone())?);

        let Some(wrapper) = entry.children.as_ref() else {
            continue;
        };
        if depth >= max_depth {
            continue;
        }

        let children = wrapper
            .entries
            .as_ref()
            .ok_or_else(|| TableError::MalformedTree { id: entry.id.clone() })?;

        for child in children {
            if child.is_auto_assembler_script() {
                continue;
            }
            let composite = format!("{label}{}", strip_surrounding_quotes(&child.description));
            out.push(flat_row(child, composite)?);
            flatten_into(std::slice::from_ref(child), depth + 1, max_depth, out)?;
        }
    }

    Ok(())
}

fn flat_row(entry: &CheatEntry, description: String) -> TableResult<FlatEntry> {
    Ok(FlatEntry {
        id: entry.id.clone(),
        description,
        variable_type: entry.variable_type.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        address: entry.address.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        sum_address: evaluate_address(entry.address.as_deref())?,
        offsets: format_offsets(entry.offsets.as_deref()),
    })
}

/// Label used for an entry's own row and as the prefix of its children's rows.
pub fn display_label(description: &str) -> String {
    remove_arrow_markers(strip_surrounding_quotes(description))
}

/// Remove one leading and one trailing `"`, independently.
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Remove every `->` marker.
pub fn remove_arrow_markers(s: &str) -> String {
    s.replace("->", "")
}
