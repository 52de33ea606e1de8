//! Alignment table (CSV) read/write.

use anyhow::{Context, Result};
use std::path::Path;

use super::AlignedRow;

pub const TABLE_HEADER: [&str; 2] = ["OLD_URL_FULL", "NEW_URL_FULL"];

/// Writes the header and one record per row; the absent side is an empty cell.
pub fn write_table(path: &Path, rows: &[AlignedRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("create alignment table: {}", path.display()))?;
    w.write_record(TABLE_HEADER)?;
    for row in rows {
        w.write_record([row.old_url().unwrap_or(""), row.new_url().unwrap_or("")])?;
    }
    w.flush()
        .with_context(|| format!("write alignment table: {}", path.display()))?;
    Ok(())
}

/// Reads an alignment table back. The first record is taken as the header;
/// records with fewer than two cells or two blank cells are ignored.
pub fn read_table(path: &Path) -> Result<Vec<AlignedRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open alignment table: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record =
            record.with_context(|| format!("parse alignment table: {}", path.display()))?;
        if record.len() < 2 {
            continue;
        }
        if let Some(row) = AlignedRow::from_cells(record[0].trim(), record[1].trim()) {
            rows.push(row);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_table_has_header_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aligned.csv");
        let rows = vec![
            AlignedRow::OldOnly("http://o/a.jpg".to_string()),
            AlignedRow::NewOnly("http://n/b.jpg".to_string()),
        ];
        write_table(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["OLD_URL_FULL,NEW_URL_FULL", "http://o/a.jpg,", ",http://n/b.jpg"]
        );
        assert_eq!(read_table(&path).unwrap(), rows);
    }

    #[test]
    fn read_skips_short_and_blank_rows_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aligned.csv");
        std::fs::write(
            &path,
            "OLD_URL_FULL,NEW_URL_FULL\nonly-one-cell\n , \n http://o/x.jpg , http://n/x.jpg \n",
        )
        .unwrap();
        let rows = read_table(&path).unwrap();
        assert_eq!(
            rows,
            vec![AlignedRow::Matched {
                old_url: "http://o/x.jpg".to_string(),
                new_url: "http://n/x.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn urls_with_commas_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aligned.csv");
        let rows = vec![AlignedRow::Matched {
            old_url: "http://o/x.jpg?resize=300,200".to_string(),
            new_url: "http://n/x.jpg".to_string(),
        }];
        write_table(&path, &rows).unwrap();
        assert_eq!(read_table(&path).unwrap(), rows);
    }
}
