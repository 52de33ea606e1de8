//! Repair stage: rewrite URLs of entries listed in the error document.

use anyhow::Result;

use super::{HINT_SCAN, HINT_VERIFY};
use crate::config::MigrationConfig;
use crate::inventory;
use crate::repair;
use crate::verify;
use crate::workspace::{self, Workspace};

#[derive(Debug)]
pub enum RepairOutcome {
    /// The error list was empty; nothing was written.
    NothingToRepair,
    Repaired { count: usize },
}

pub fn run_repair(ws: &Workspace, cfg: &MigrationConfig) -> Result<RepairOutcome> {
    let inventory_path = workspace::require(ws.inventory(), "inventory", HINT_SCAN)?;
    let errors_path = workspace::require(ws.errors_json(), "error list", HINT_VERIFY)?;

    let mut entries = inventory::read_inventory(&inventory_path)?;
    let errors = verify::read_error_records(&errors_path)?;
    if errors.is_empty() {
        tracing::info!("error list is empty, inventory left as is");
        return Ok(RepairOutcome::NothingToRepair);
    }

    let broken = repair::broken_names(&errors);
    let count = repair::repair(&mut entries, &broken, &cfg.new_url_prefix, &cfg.repair_suffix);
    if count == 0 {
        tracing::warn!("none of the {} listed files are in the inventory", broken.len());
        return Ok(RepairOutcome::Repaired { count });
    }
    inventory::write_inventory(&inventory_path, &entries)?;
    tracing::info!("repaired {} links with suffix {:?}", count, cfg.repair_suffix);

    Ok(RepairOutcome::Repaired { count })
}
