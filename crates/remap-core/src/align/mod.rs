//! Alignment engine: sorted merge-join of the legacy and new inventories by stem.

mod table;

pub use table::{read_table, write_table, TABLE_HEADER};

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::inventory::InventoryEntry;
use crate::legacy::LegacyEntry;

/// One row of the alignment table. At least one side is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignedRow {
    /// Old and new URL share a stem.
    Matched { old_url: String, new_url: String },
    /// Legacy asset with no counterpart in the new inventory.
    OldOnly(String),
    /// New asset with no legacy counterpart.
    NewOnly(String),
}

impl AlignedRow {
    /// Builds a row from two table cells; `None` when both are empty.
    pub fn from_cells(old_url: &str, new_url: &str) -> Option<Self> {
        match (old_url.is_empty(), new_url.is_empty()) {
            (false, false) => Some(AlignedRow::Matched {
                old_url: old_url.to_string(),
                new_url: new_url.to_string(),
            }),
            (false, true) => Some(AlignedRow::OldOnly(old_url.to_string())),
            (true, false) => Some(AlignedRow::NewOnly(new_url.to_string())),
            (true, true) => None,
        }
    }

    pub fn old_url(&self) -> Option<&str> {
        match self {
            AlignedRow::Matched { old_url, .. } | AlignedRow::OldOnly(old_url) => {
                Some(old_url.as_str())
            }
            AlignedRow::NewOnly(_) => None,
        }
    }

    pub fn new_url(&self) -> Option<&str> {
        match self {
            AlignedRow::Matched { new_url, .. } | AlignedRow::NewOnly(new_url) => {
                Some(new_url.as_str())
            }
            AlignedRow::OldOnly(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, AlignedRow::Matched { .. })
    }
}

/// Row counts of an alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentSummary {
    pub matched: usize,
    pub old_only: usize,
    pub new_only: usize,
}

impl AlignmentSummary {
    pub fn of(rows: &[AlignedRow]) -> Self {
        rows.iter().fold(Self::default(), |mut s, row| {
            match row {
                AlignedRow::Matched { .. } => s.matched += 1,
                AlignedRow::OldOnly(_) => s.old_only += 1,
                AlignedRow::NewOnly(_) => s.new_only += 1,
            }
            s
        })
    }
}

/// Compares two cursor positions; an exhausted side (`None`) sorts after every stem.
fn compare_heads(old: Option<&str>, new: Option<&str>) -> Ordering {
    match (old, new) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Pairs `old` and `new` entries with byte-equal stems.
///
/// Both sides are stably sorted by stem first, so callers need not pre-sort.
/// A new entry with an empty `stem` is keyed on `normalize(local_name)`.
/// Every input entry lands in exactly one row; rows come out in stem order.
/// Duplicate stems pair greedily in input order (first with first, second with
/// second); leftovers become one-sided rows.
pub fn align(old: &[LegacyEntry], new: &[InventoryEntry]) -> Vec<AlignedRow> {
    let mut old_sorted: Vec<&LegacyEntry> = old.iter().collect();
    old_sorted.sort_by(|a, b| a.stem.cmp(&b.stem));
    // Entries that skipped `read_inventory` may carry no stem.
    let mut new_sorted: Vec<(Cow<'_, str>, &InventoryEntry)> =
        new.iter().map(|e| (e.stem_key(), e)).collect();
    new_sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut rows = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0usize, 0usize);

    while i < old_sorted.len() || j < new_sorted.len() {
        let a = old_sorted.get(i).map(|e| e.stem.as_str());
        let b = new_sorted.get(j).map(|(stem, _)| stem.as_ref());

        match compare_heads(a, b) {
            Ordering::Equal => {
                let (o, n) = (old_sorted[i], new_sorted[j].1);
                tracing::debug!(stem = %o.stem, "matched {} -> {}", o.full_url, n.generated_url);
                rows.push(AlignedRow::Matched {
                    old_url: o.full_url.clone(),
                    new_url: n.generated_url.clone(),
                });
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                rows.push(AlignedRow::OldOnly(old_sorted[i].full_url.clone()));
                i += 1;
            }
            Ordering::Greater => {
                rows.push(AlignedRow::NewOnly(new_sorted[j].1.generated_url.clone()));
                j += 1;
            }
        }
    }

    rows
}
