use std::path::Path;

use anyhow::{Context, Result};
use cetable_core::model::FlatEntry;
use cetable_core::services::convert_table;

use crate::read_table_source;

/// Print the deduplicated rows of a table without writing any files.
pub fn preview_command(input: &Path, max_depth: usize, json: bool) -> Result<Vec<FlatEntry>> {
    let xml = read_table_source(input)?;
    let conversion = convert_table(&xml, max_depth)?;

    if json {
        let serialized = serde_json::to_string_pretty(&conversion.rows)
            .context("Failed to serialize rows to JSON")?;
        println!("{}", serialized);
        return Ok(conversion.rows);
    }

    println!("Rows ({}):", conversion.rows.len());
    if conversion.rows.is_empty() {
        println!("  (none)");
        return Ok(conversion.rows);
    }

    for row in &conversion.rows {
        let offsets = if row.offsets.is_empty() { "-" } else { row.offsets.as_str() };
        println!(
            "  - [{}] {} ({}) address={} sum={} offsets={}",
            row.id, row.description, row.variable_type, row.address, row.sum_address, offsets
        );
    }

    Ok(conversion.rows)
}
