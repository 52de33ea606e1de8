//! Verify stage: probe every generated URL and write the error documents.

use anyhow::Result;

use super::HINT_SCAN;
use crate::config::MigrationConfig;
use crate::inventory;
use crate::verify::{self, LinkProber};
use crate::workspace::{self, Workspace};

#[derive(Debug)]
pub struct VerifyOutcome {
    pub checked: usize,
    pub broken: usize,
    pub transport_failures: usize,
}

pub fn run_verify<P: LinkProber + ?Sized>(
    ws: &Workspace,
    cfg: &MigrationConfig,
    prober: &P,
) -> Result<VerifyOutcome> {
    let inventory_path = workspace::require(ws.inventory(), "inventory", HINT_SCAN)?;
    let entries = inventory::read_inventory(&inventory_path)?;
    tracing::info!("verifying {} links", entries.len());

    let report = verify::verify_inventory(&entries, prober, cfg.probe.flag_transport_errors);
    verify::write_error_docs(&ws.errors_json(), &ws.errors_csv(), &report.broken)?;
    tracing::info!(
        checked = report.checked,
        broken = report.broken.len(),
        transport_failures = report.transport_failures,
        "verification finished"
    );

    Ok(VerifyOutcome {
        checked: report.checked,
        broken: report.broken.len(),
        transport_failures: report.transport_failures,
    })
}
