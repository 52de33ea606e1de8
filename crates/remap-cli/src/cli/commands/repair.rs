//! `remap repair` – regenerate URLs listed in the error document.

use anyhow::Result;
use remap_core::config::MigrationConfig;
use remap_core::stage::{self, RepairOutcome};
use remap_core::workspace::Workspace;

pub fn run_repair(ws: &Workspace, cfg: &MigrationConfig) -> Result<()> {
    match stage::run_repair(ws, cfg)? {
        RepairOutcome::NothingToRepair => println!("No broken links to repair."),
        RepairOutcome::Repaired { count } => {
            println!("Repaired {count} links with suffix {:?}.", cfg.repair_suffix);
            if count > 0 {
                println!("Run `remap align` again to refresh the mapping with the new URLs.");
            }
        }
    }
    Ok(())
}
