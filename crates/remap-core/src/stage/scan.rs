//! Scan stage: local directory → inventory document.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::MigrationConfig;
use crate::inventory;
use crate::workspace::Workspace;

#[derive(Debug)]
pub struct ScanOutcome {
    pub files: usize,
    pub inventory_path: PathBuf,
}

pub fn run_scan(ws: &Workspace, cfg: &MigrationConfig) -> Result<ScanOutcome> {
    let names = inventory::scan_dir(ws.dir(), cfg)?;
    let entries = inventory::build(&names, &cfg.new_url_prefix, &cfg.new_url_suffix);
    let inventory_path = ws.inventory();
    inventory::write_inventory(&inventory_path, &entries)?;
    tracing::info!(
        "scanned {} files in {} into {}",
        entries.len(),
        ws.dir().display(),
        inventory_path.display()
    );
    Ok(ScanOutcome {
        files: entries.len(),
        inventory_path,
    })
}
