//! `remap align <old.csv>` – pair legacy URLs with the inventory.

use anyhow::Result;
use remap_core::stage;
use remap_core::workspace::Workspace;
use std::path::Path;

pub fn run_align(ws: &Workspace, old_csv: &Path) -> Result<()> {
    let outcome = stage::run_align(ws, old_csv)?;
    let s = outcome.summary;
    println!("Alignment written to {}", outcome.table_path.display());
    println!("{:<10} {}", "matched", s.matched);
    println!("{:<10} {}", "old only", s.old_only);
    println!("{:<10} {}", "new only", s.new_only);
    if outcome.skipped_legacy > 0 {
        println!(
            "  ({} legacy rows skipped: no file name in URL)",
            outcome.skipped_legacy
        );
    }
    Ok(())
}
