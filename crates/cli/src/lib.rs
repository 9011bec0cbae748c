use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use cetable_core::TableError;
use sha2::{Digest, Sha256};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Install the stderr tracing subscriber.
///
/// Defaults to `info`; `RUST_LOG` overrides. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the cheat table markup at `path`.
pub fn read_table_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read cheat table at {}", path.display()))
}

/// Compute the SHA-256 hash of a file and return it as a hex string.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open cheat table for hashing: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = reader.read(&mut buf).with_context(|| {
            format!("Failed to read cheat table for hashing: {}", path.display())
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hasher.finalize();
    Ok(format!("{:x}", digest))
}

/// Format a top-level error for the console, tagged by whether it is a known table error.
pub fn describe_error(err: &anyhow::Error) -> String {
    if err.chain().any(|cause| cause.downcast_ref::<TableError>().is_some()) {
        format!("Table error: {err:#}")
    } else {
        format!("Unexpected error: {err:#}")
    }
}
