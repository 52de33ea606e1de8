//! `remap map` – write the replacement mapping document.

use anyhow::Result;
use remap_core::stage;
use remap_core::workspace::Workspace;

pub fn run_map(ws: &Workspace) -> Result<()> {
    let outcome = stage::run_map(ws)?;
    println!(
        "Wrote {} pairs to {}",
        outcome.pairs,
        outcome.mapping_path.display()
    );
    if !outcome.unsafe_urls.is_empty() {
        println!("Warning: these URLs contain quotes and are not escaped:");
        for url in &outcome.unsafe_urls {
            println!("  {url}");
        }
    }
    Ok(())
}
