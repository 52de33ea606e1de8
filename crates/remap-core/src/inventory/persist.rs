//! Inventory document (JSON list of entries) read/write.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::InventoryEntry;

/// Writes `entries` as a pretty-printed JSON list with 4-space indentation.
pub fn write_inventory(path: &Path, entries: &[InventoryEntry]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut ser)
        .context("serialize inventory")?;
    std::fs::write(path, buf).with_context(|| format!("write inventory: {}", path.display()))?;
    Ok(())
}

/// Reads an inventory document. Entries without a stored stem get one computed.
pub fn read_inventory(path: &Path) -> Result<Vec<InventoryEntry>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read inventory: {}", path.display()))?;
    let mut entries: Vec<InventoryEntry> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse inventory: {}", path.display()))?;
    for e in &mut entries {
        e.ensure_stem();
    }
    Ok(entries)
}
