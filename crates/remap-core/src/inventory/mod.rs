//! The "new" inventory: one entry per local file, with the URL it will have on
//! the new site.

mod persist;

pub use persist::{read_inventory, write_inventory};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

use crate::config::MigrationConfig;
use crate::url_model;

/// One scanned local file and the URL generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// File name as found in the scanned directory.
    #[serde(rename = "archivo_local")]
    pub local_name: String,
    /// URL the file is expected to live at after upload.
    #[serde(rename = "url_generada")]
    pub generated_url: String,
    /// Advisory copy of `normalize(local_name)`; may be absent in older documents.
    #[serde(default)]
    pub stem: String,
}

impl InventoryEntry {
    pub fn new(local_name: &str, url_prefix: &str, suffix: &str) -> Self {
        Self {
            local_name: local_name.to_string(),
            generated_url: generated_url(local_name, url_prefix, suffix),
            stem: url_model::normalize(local_name),
        }
    }

    /// Stem to align on: the stored one, or `normalize(local_name)` when absent.
    pub fn stem_key(&self) -> Cow<'_, str> {
        if self.stem.is_empty() {
            Cow::Owned(url_model::normalize(&self.local_name))
        } else {
            Cow::Borrowed(&self.stem)
        }
    }

    /// Fills in the stem if the stored document did not carry one.
    pub fn ensure_stem(&mut self) {
        if self.stem.is_empty() {
            self.stem = url_model::normalize(&self.local_name);
        }
    }
}

/// `url_prefix` followed by `file_name` with `suffix` inserted before its extension.
pub fn generated_url(file_name: &str, url_prefix: &str, suffix: &str) -> String {
    format!("{url_prefix}{}", url_model::insert_suffix(file_name, suffix))
}

/// Builds the inventory for `file_names`, in the order given.
pub fn build<S: AsRef<str>>(file_names: &[S], url_prefix: &str, suffix: &str) -> Vec<InventoryEntry> {
    file_names
        .iter()
        .map(|name| InventoryEntry::new(name.as_ref(), url_prefix, suffix))
        .collect()
}

/// Lists regular files in `dir` whose extension the config accepts, sorted by name.
///
/// Names that are not valid UTF-8 are skipped with a warning.
pub fn scan_dir(dir: &Path, cfg: &MigrationConfig) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read dir: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read dir entry in {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                tracing::warn!("skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };
        if cfg.accepts_file(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
