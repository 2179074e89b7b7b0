// QuoteDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies. These types are the shared vocabulary across all layers.

use crate::util::constants::TAG_SEPARATOR;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Row (normalised output of ingestion)
// =============================================================================

/// One normalised quote/event record.
///
/// Every row has exactly these 10 fields, all strings. Absence is always
/// the empty string — never an Option — so downstream code has no
/// null-handling branches. This invariant holds for every row the
/// ingestion engine produces, repaired or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Row {
    pub record_id: String,
    pub event_date: String,
    pub event_type: String,
    pub event_title: String,
    pub show_or_host: String,
    pub clip_url: String,
    pub quote_text: String,
    pub tweet_text: String,
    pub tags: String,
    pub status: String,
}

impl Row {
    /// Build a row from exactly 10 positional fields.
    ///
    /// Callers (the ingestion engine) are responsible for padding or
    /// merging the raw cells to exactly 10 first.
    pub fn from_fields(fields: [String; 10]) -> Self {
        let [record_id, event_date, event_type, event_title, show_or_host, clip_url, quote_text, tweet_text, tags, status] =
            fields;
        Self {
            record_id,
            event_date,
            event_type,
            event_title,
            show_or_host,
            clip_url,
            quote_text,
            tweet_text,
            tags,
            status,
        }
    }

    /// The row's field values in canonical column order.
    pub fn fields(&self) -> [&str; 10] {
        [
            &self.record_id,
            &self.event_date,
            &self.event_type,
            &self.event_title,
            &self.show_or_host,
            &self.clip_url,
            &self.quote_text,
            &self.tweet_text,
            &self.tags,
            &self.status,
        ]
    }

    /// Pipe-split tag list: trimmed, non-empty, in first-seen source order.
    /// Duplicates are not removed here; filtering treats tags
    /// case-insensitively on top of this.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

// =============================================================================
// Repair notes
// =============================================================================

/// What the repair pass did to a malformed source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RepairKind {
    /// Line had fewer than 10 fields; padded on the right with empties.
    Padded {
        /// Field count before padding.
        original: usize,
        /// Number of empty fields appended.
        padded: usize,
    },

    /// Line had more than 10 fields; interior spillover was merged into
    /// `quote_text` (and `tweet_text` when more than one interior field
    /// was present).
    SpillMerged {
        /// Field count before merging.
        original: usize,
        /// Number of interior fields collapsed.
        merged: usize,
    },
}

/// Diagnostic attached to each malformed source line.
///
/// A note never changes the Row shape; it records what was repaired so a
/// renderer can mark the row and an operator can fix the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairNote {
    /// 1-based line number within the non-empty source lines
    /// (header included when present).
    pub line_number: usize,

    /// Index of the produced row in the output sequence.
    pub row_index: usize,

    /// The repair that was applied.
    pub kind: RepairKind,
}

impl fmt::Display for RepairNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairKind::Padded { original, padded } => write!(
                f,
                "row {} had {original} fields; padded {padded}",
                self.line_number
            ),
            RepairKind::SpillMerged { original, merged } => write!(
                f,
                "row {} had {original} fields; merged {merged} interior fields \
                 into quote_text (and tweet_text if present)",
                self.line_number
            ),
        }
    }
}

// =============================================================================
// Ingest result
// =============================================================================

/// Result of ingesting one raw dataset text.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// Produced rows, in source line order.
    pub rows: Vec<Row>,

    /// One note per repaired line, in source line order.
    pub repairs: Vec<RepairNote>,

    /// Total non-empty lines processed (header included when present).
    pub lines_processed: u64,

    /// Whether the first non-empty line was recognised as the canonical
    /// header and skipped.
    pub header_skipped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_trims_and_drops_empties() {
        let row = Row {
            tags: " Policy | media||  Economy ".to_string(),
            ..Default::default()
        };
        assert_eq!(row.tag_list(), vec!["Policy", "media", "Economy"]);
    }

    #[test]
    fn test_tag_list_keeps_duplicates_and_order() {
        let row = Row {
            tags: "b|a|b".to_string(),
            ..Default::default()
        };
        assert_eq!(row.tag_list(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_tag_list_empty_field() {
        let row = Row::default();
        assert!(row.tag_list().is_empty());
    }

    #[test]
    fn test_fields_round_trip() {
        let fields: [String; 10] = std::array::from_fn(|i| format!("f{i}"));
        let row = Row::from_fields(fields.clone());
        assert_eq!(row.record_id, "f0");
        assert_eq!(row.status, "f9");
        let back: Vec<&str> = row.fields().to_vec();
        assert_eq!(back, fields.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_repair_note_display() {
        let padded = RepairNote {
            line_number: 4,
            row_index: 2,
            kind: RepairKind::Padded {
                original: 8,
                padded: 2,
            },
        };
        assert_eq!(padded.to_string(), "row 4 had 8 fields; padded 2");

        let merged = RepairNote {
            line_number: 7,
            row_index: 5,
            kind: RepairKind::SpillMerged {
                original: 12,
                merged: 4,
            },
        };
        assert!(merged.to_string().contains("had 12 fields"));
        assert!(merged.to_string().contains("merged 4 interior fields"));
    }
}
