//! Error documents: JSON list of error records plus a two-column CSV.

use anyhow::{Context, Result};
use std::path::Path;

use super::ErrorRecord;
use crate::inventory;

pub const ERRORS_CSV_HEADER: [&str; 2] = ["Archivo", "URL Fallida"];

/// Writes both error documents. Empty lists are written too, so a later repair
/// run sees that verification happened and found nothing.
pub fn write_error_docs(json_path: &Path, csv_path: &Path, errors: &[ErrorRecord]) -> Result<()> {
    inventory::write_inventory(json_path, errors)
        .with_context(|| format!("write error list: {}", json_path.display()))?;

    let mut w = csv::Writer::from_path(csv_path)
        .with_context(|| format!("create error table: {}", csv_path.display()))?;
    w.write_record(ERRORS_CSV_HEADER)?;
    for e in errors {
        w.write_record([e.local_name.as_str(), e.generated_url.as_str()])?;
    }
    w.flush()
        .with_context(|| format!("write error table: {}", csv_path.display()))?;
    Ok(())
}

/// Reads the JSON error list written by [`write_error_docs`].
pub fn read_error_records(json_path: &Path) -> Result<Vec<ErrorRecord>> {
    inventory::read_inventory(json_path)
        .with_context(|| format!("read error list: {}", json_path.display()))
}
