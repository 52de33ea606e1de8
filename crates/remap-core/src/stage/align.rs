//! Align stage: inventory document + legacy URL list → alignment table.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::HINT_SCAN;
use crate::align::{self, AlignmentSummary};
use crate::inventory;
use crate::legacy;
use crate::workspace::{self, Workspace};

#[derive(Debug)]
pub struct AlignOutcome {
    pub summary: AlignmentSummary,
    /// Legacy rows dropped because their URL had no usable stem.
    pub skipped_legacy: usize,
    pub table_path: PathBuf,
}

pub fn run_align(ws: &Workspace, legacy_csv: &Path) -> Result<AlignOutcome> {
    let inventory_path = workspace::require(ws.inventory(), "inventory", HINT_SCAN)?;
    let legacy_path = workspace::require(
        ws.resolve(legacy_csv),
        "legacy URL list",
        "pass the CSV exported from the old site",
    )?;

    let new_side = inventory::read_inventory(&inventory_path)?;
    let old_side = legacy::read_legacy_file(&legacy_path)?;
    if old_side.skipped > 0 {
        tracing::warn!("{} legacy rows had no usable file name", old_side.skipped);
    }

    let rows = align::align(&old_side.entries, &new_side);
    let summary = AlignmentSummary::of(&rows);
    let table_path = ws.aligned();
    align::write_table(&table_path, &rows)?;
    tracing::info!(
        matched = summary.matched,
        old_only = summary.old_only,
        new_only = summary.new_only,
        "alignment written to {}",
        table_path.display()
    );

    Ok(AlignOutcome {
        summary,
        skipped_legacy: old_side.skipped,
        table_path,
    })
}
