use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::services::DEFAULT_MAX_DEPTH;

/// Default source table, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/person-player.xml";
/// Default CSV target, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output/cheat_table.csv";

/// Serializable settings for one export run.
///
/// Loaded from an optional JSON/YAML file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Cheat table markup to read.
    pub input: PathBuf,
    /// CSV file to write.
    pub output: PathBuf,
    /// Nesting depth below which children are not descended into.
    pub max_depth: usize,
    /// Also write a `<output>.meta.json` sidecar describing the run.
    pub metadata: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_depth: DEFAULT_MAX_DEPTH,
            metadata: false,
        }
    }
}

impl ExportConfig {
    /// Path of the metadata sidecar next to the CSV output.
    pub fn metadata_path(&self) -> PathBuf {
        let mut name = self.output.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".meta.json");
        self.output.with_file_name(name)
    }
}

/// Load an export config from a `.json`, `.yaml`, or `.yml` file.
pub fn load_export_config(path: &Path) -> Result<ExportConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read export config at {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match ext {
        "json" => serde_json::from_str(&body).context("Failed to parse export config JSON"),
        "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse export config YAML"),
        other => Err(anyhow!(
            "Unsupported config format '{}' for {}. Allowed: json, yaml, yml",
            other,
            path.display()
        )),
    }
}
