//! `remap scan` – build the inventory from local files.

use anyhow::Result;
use remap_core::config::MigrationConfig;
use remap_core::stage;
use remap_core::workspace::Workspace;

pub fn run_scan(ws: &Workspace, cfg: &MigrationConfig) -> Result<()> {
    let outcome = stage::run_scan(ws, cfg)?;
    println!(
        "Scanned {} local files into {}",
        outcome.files,
        outcome.inventory_path.display()
    );
    Ok(())
}
