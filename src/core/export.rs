// QuoteDeck - core/export.rs
//
// CSV and JSON export of filtered rows.
// Core layer: writes to any Write trait object.

use crate::core::model::Row;
use crate::util::constants::COLUMNS;
use crate::util::error::ExportError;
use std::io::Write;

/// Export rows to CSV with the canonical 10-column header.
/// Returns the number of rows written.
pub fn export_csv<W: Write>(rows: &[Row], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(COLUMNS)
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for row in rows {
        csv_writer
            .write_record(row.fields())
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export rows to JSON (pretty-printed array of objects).
/// Returns the number of rows written.
pub fn export_json<W: Write>(rows: &[Row], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, rows).map_err(|e| ExportError::Json { source: e })?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(id: &str, quote: &str) -> Row {
        Row {
            record_id: id.to_string(),
            quote_text: quote.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![make_row("q1", "Quote one"), make_row("q2", "Quote two")];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("record_id,event_date"));
        assert!(output.contains("Quote one"));
        assert!(output.contains("Quote two"));
    }

    #[test]
    fn test_json_export() {
        let rows = vec![make_row("q1", "Test quote")];
        let mut buf = Vec::new();
        let count = export_json(&rows, &mut buf).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Test quote"));
        assert!(output.contains("\"record_id\": \"q1\""));
    }
}
