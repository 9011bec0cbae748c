//! CSV export of flattened rows.
//!
//! Column order is fixed: `ID,Description,VariableType,Address,SumAddress,Offsets`.
//! Fields are written verbatim; only `Offsets` is wrapped in double quotes.
//! Embedded commas in descriptions are not escaped, so callers that need
//! strict CSV must sanitize descriptions first.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::model::FlatEntry;

/// Header row, in column order.
pub const CSV_HEADER: [&str; 6] =
    ["ID", "Description", "VariableType", "Address", "SumAddress", "Offsets"];

/// Render rows (header first) into a CSV string.
pub fn render_csv(rows: &[FlatEntry]) -> Result<String> {
    let mut writer =
        WriterBuilder::new().quote_style(QuoteStyle::Never).from_writer(Vec::<u8>::new());

    writer.write_record(CSV_HEADER).context("Failed to write CSV header")?;
    for row in rows {
        let offsets = format!("\"{}\"", row.offsets);
        writer
            .write_record([
                row.id.as_str(),
                row.description.as_str(),
                row.variable_type.as_str(),
                row.address.as_str(),
                row.sum_address.as_str(),
                offsets.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for entry {}", row.id))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to finish CSV output: {}", err.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Render rows and write them to `path`, creating the parent directory if needed.
///
/// The whole file is rendered before anything touches the disk.
pub fn write_csv(rows: &[FlatEntry], path: &Path) -> Result<()> {
    let body = render_csv(rows)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
    }
    fs::write(path, body)
        .with_context(|| format!("Failed to write CSV export at {}", path.display()))?;
    Ok(())
}
