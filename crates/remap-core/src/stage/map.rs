//! Map stage: alignment table → mapping document.

use anyhow::Result;
use std::path::PathBuf;

use super::HINT_ALIGN;
use crate::align;
use crate::mapping;
use crate::workspace::{self, Workspace};

#[derive(Debug)]
pub struct MapOutcome {
    pub pairs: usize,
    /// URLs containing quotes; the document is written anyway.
    pub unsafe_urls: Vec<String>,
    pub mapping_path: PathBuf,
}

pub fn run_map(ws: &Workspace) -> Result<MapOutcome> {
    let table_path = workspace::require(ws.aligned(), "alignment table", HINT_ALIGN)?;
    let rows = align::read_table(&table_path)?;

    let unsafe_urls: Vec<String> = mapping::unsafe_urls(&rows)
        .into_iter()
        .map(str::to_string)
        .collect();
    for url in &unsafe_urls {
        tracing::warn!("URL contains a quote and is written unescaped: {url}");
    }

    let mapping_path = ws.mapping();
    let pairs = mapping::write_mapping(&mapping_path, &rows)?;
    tracing::info!("{} pairs written to {}", pairs, mapping_path.display());

    Ok(MapOutcome {
        pairs,
        unsafe_urls,
        mapping_path,
    })
}
