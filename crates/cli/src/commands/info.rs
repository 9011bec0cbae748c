use std::path::Path;

use anyhow::{Context, Result};
use cetable_core::decode::decode_cheat_table;
use cetable_core::TableError;
use serde::Serialize;

use crate::{read_table_source, sha256_file};

#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    pub source: String,
    pub sha256: String,
    pub top_level_entries: usize,
    pub total_entries: usize,
    pub script_entries: usize,
}

/// Show counts and the content hash of a cheat table.
pub fn info_command(input: &Path, json: bool) -> Result<TableInfo> {
    let xml = read_table_source(input)?;
    let table = decode_cheat_table(&xml).map_err(TableError::from)?;

    let mut script_entries = 0;
    let mut stack: Vec<_> = table.entries.iter().collect();
    while let Some(entry) = stack.pop() {
        if entry.is_auto_assembler_script() {
            script_entries += 1;
        }
        if let Some(children) = entry.children.as_ref().and_then(|c| c.entries.as_ref()) {
            stack.extend(children.iter());
        }
    }

    let info = TableInfo {
        source: input.display().to_string(),
        sha256: sha256_file(input)?,
        top_level_entries: table.entries.len(),
        total_entries: table.entry_count(),
        script_entries,
    };

    if json {
        let serialized =
            serde_json::to_string_pretty(&info).context("Failed to serialize table info")?;
        println!("{}", serialized);
    } else {
        println!("Cheat Table Info");
        println!("================");
        println!("Source: {}", info.source);
        println!("SHA-256: {}", info.sha256);
        println!("Top-level entries: {}", info.top_level_entries);
        println!("Total entries: {}", info.total_entries);
        println!("Auto Assembler scripts: {}", info.script_entries);
    }

    Ok(info)
}
