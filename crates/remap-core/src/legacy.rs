//! The "old" side: URLs scraped from the legacy site, supplied as a CSV file.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::url_model;

/// One legacy URL and its stem. Built fresh on every alignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    pub full_url: String,
    pub stem: String,
}

impl LegacyEntry {
    /// Returns `None` when the URL does not reduce to a non-empty stem.
    pub fn from_url(full_url: &str) -> Option<Self> {
        let full_url = full_url.trim();
        let stem = url_model::normalize(full_url);
        if stem.is_empty() {
            return None;
        }
        Some(Self {
            full_url: full_url.to_string(),
            stem,
        })
    }
}

/// Legacy entries plus how many non-empty rows were dropped for having no stem.
#[derive(Debug, Default)]
pub struct LegacyList {
    pub entries: Vec<LegacyEntry>,
    pub skipped: usize,
}

/// Builds legacy entries from first-column cells; blank cells are ignored,
/// cells without a usable stem are counted in `skipped`.
pub fn from_cells<I, S>(cells: I) -> LegacyList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = LegacyList::default();
    for cell in cells {
        let cell = cell.as_ref().trim();
        if cell.is_empty() {
            continue;
        }
        match LegacyEntry::from_url(cell) {
            Some(entry) => list.entries.push(entry),
            None => {
                tracing::debug!("dropping legacy row without stem: {cell}");
                list.skipped += 1;
            }
        }
    }
    list
}

/// Reads the first column of a header-less, possibly ragged CSV.
pub fn read_legacy<R: Read>(reader: R) -> Result<LegacyList> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut cells = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("parse legacy CSV row {}", idx + 1))?;
        let Some(first) = record.get(0) else {
            continue;
        };
        let first = if idx == 0 {
            first.trim_start_matches('\u{feff}')
        } else {
            first
        };
        cells.push(first.to_string());
    }
    Ok(from_cells(cells))
}

/// Reads the legacy URL list from a CSV file.
pub fn read_legacy_file(path: &Path) -> Result<LegacyList> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open legacy URL list: {}", path.display()))?;
    read_legacy(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_only() {
        let csv = "https://old/a.jpg,ignored\nhttps://old/b.png\n";
        let list = read_legacy(csv.as_bytes()).unwrap();
        let stems: Vec<_> = list.entries.iter().map(|e| e.stem.as_str()).collect();
        assert_eq!(stems, vec!["a", "b"]);
        assert_eq!(list.entries[0].full_url, "https://old/a.jpg");
    }

    #[test]
    fn blank_rows_skipped_silently() {
        let csv = "\n ,x\nhttps://old/a.jpg\n";
        let list = read_legacy(csv.as_bytes()).unwrap();
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.skipped, 0);
    }

    #[test]
    fn stemless_rows_dropped_and_counted() {
        let csv = "https://old.example.com/\nhttps://old/a.jpg\n";
        let list = read_legacy(csv.as_bytes()).unwrap();
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.skipped, 1);
    }

    #[test]
    fn bom_is_stripped() {
        let csv = "\u{feff}https://old/a.jpg\n";
        let list = read_legacy(csv.as_bytes()).unwrap();
        assert_eq!(list.entries[0].full_url, "https://old/a.jpg");
    }

    #[test]
    fn cells_are_trimmed() {
        let list = from_cells(["  https://old/Foto.JPG  "]);
        assert_eq!(list.entries[0].full_url, "https://old/Foto.JPG");
        assert_eq!(list.entries[0].stem, "foto");
    }
}
