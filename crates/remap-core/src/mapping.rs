//! Mapping document: the old→new replacement table handed to the site's URL rewriter.
//!
//! The format is written by hand, one `'src="old"' => 'src="new"'` line per
//! matched row, so that no JSON-style backslash escaping ends up in the output.
//! Quotes inside URLs are NOT escaped; a URL containing `'` or `"` produces a
//! line the consumer cannot parse. Callers that need strict output should
//! check [`unsafe_urls`] first.

use anyhow::{Context, Result};
use std::path::Path;

use crate::align::AlignedRow;

/// Key/value pairs for every row that has both sides, in table order.
pub fn pairs(rows: &[AlignedRow]) -> Vec<(String, String)> {
    rows.iter()
        .filter_map(|row| match row {
            AlignedRow::Matched { old_url, new_url } => {
                Some((format!("src=\"{old_url}\""), format!("src=\"{new_url}\"")))
            }
            _ => None,
        })
        .collect()
}

/// Renders the brace-wrapped mapping document. The last line has no trailing comma.
pub fn render(rows: &[AlignedRow]) -> String {
    let pairs = pairs(rows);
    let mut out = String::from("{\n");
    let last = pairs.len().saturating_sub(1);
    for (idx, (k, v)) in pairs.iter().enumerate() {
        let comma = if idx < last { "," } else { "" };
        out.push_str(&format!("    '{k}' => '{v}'{comma}\n"));
    }
    out.push('}');
    out
}

/// URLs of matched rows that contain a quote character and would break the document.
pub fn unsafe_urls(rows: &[AlignedRow]) -> Vec<&str> {
    rows.iter()
        .filter(|row| row.is_match())
        .flat_map(|row| [row.old_url(), row.new_url()])
        .flatten()
        .filter(|url| url.contains(['\'', '"']))
        .collect()
}

/// Renders and writes the mapping document; returns the number of pairs written.
pub fn write_mapping(path: &Path, rows: &[AlignedRow]) -> Result<usize> {
    let count = rows.iter().filter(|r| r.is_match()).count();
    std::fs::write(path, render(rows))
        .with_context(|| format!("write mapping: {}", path.display()))?;
    Ok(count)
}
