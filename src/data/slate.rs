//! Slate loading.
//!
//! A slate is one day's games, supplied as a JSON array of game records. Only the
//! array shape is checked here. Entries stay untyped JSON until analysis, where each
//! one is deserialized and validated on its own so a single bad record cannot sink
//! the whole slate.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a slate file from disk.
pub fn load_slate(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read slate file: {}", path.display()))?;
    parse_slate(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse a slate from its JSON text.
pub fn parse_slate(json: &str) -> Result<Vec<Value>> {
    let records: Vec<Value> =
        serde_json::from_str(json).context("slate must be a JSON array of game records")?;
    tracing::debug!(records = records.len(), "Slate parsed");
    Ok(records)
}
