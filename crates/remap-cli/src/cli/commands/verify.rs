//! `remap verify` – probe generated URLs and record the broken ones.

use anyhow::Result;
use remap_core::config::MigrationConfig;
use remap_core::stage;
use remap_core::verify::CurlProber;
use remap_core::workspace::Workspace;

pub fn run_verify(ws: &Workspace, cfg: &MigrationConfig) -> Result<()> {
    let prober = CurlProber::from_config(&cfg.probe);
    let outcome = stage::run_verify(ws, cfg, &prober)?;
    println!(
        "Checked {} links: {} broken, {} unreachable",
        outcome.checked, outcome.broken, outcome.transport_failures
    );
    if outcome.transport_failures > 0 && !cfg.probe.flag_transport_errors {
        println!(
            "  (unreachable links are not listed; set probe.flag_transport_errors to include them)"
        );
    }
    Ok(())
}
