//! Repair pass: regenerate the URL of inventory entries flagged as broken.

use std::collections::HashSet;

use crate::inventory::{self, InventoryEntry};

/// Rewrites `generated_url` of every entry whose `local_name` is in `broken`.
///
/// The new URL is `url_prefix` plus the original file name with `repair_suffix`
/// inserted before its extension; whatever suffix the builder applied is
/// discarded. Other entries and the entry order are left untouched. Returns the
/// number of entries rewritten (duplicated local names each count).
pub fn repair(
    inventory: &mut [InventoryEntry],
    broken: &HashSet<String>,
    url_prefix: &str,
    repair_suffix: &str,
) -> usize {
    if broken.is_empty() {
        return 0;
    }
    let mut count = 0;
    for entry in inventory.iter_mut() {
        if broken.contains(&entry.local_name) {
            let url = inventory::generated_url(&entry.local_name, url_prefix, repair_suffix);
            tracing::debug!("repair {}: {} -> {}", entry.local_name, entry.generated_url, url);
            entry.generated_url = url;
            count += 1;
        }
    }
    count
}

/// Set of local names from a list of error records.
pub fn broken_names(errors: &[InventoryEntry]) -> HashSet<String> {
    errors.iter().map(|e| e.local_name.clone()).collect()
}
