// QuoteDeck - core/ingest.rs
//
// Lenient TSV ingestion with row repair.
// Core layer: accepts a raw text string, never touches the filesystem.
//
// Parsing is total: malformed rows are repaired (padded or spill-merged)
// and recorded as RepairNotes, never raised. Only fully blank lines are
// skipped. The only fallible step of loading a dataset is transport,
// which lives in the app layer.

use crate::core::model::{IngestResult, RepairKind, RepairNote, Row};
use crate::util::constants::{COLUMNS, FIELD_COUNT, SPILL_PREFIX_FIELDS, SPILL_SUFFIX_FIELDS};

/// Parse raw tab-delimited text into an ordered sequence of rows plus
/// repair diagnostics.
///
/// Steps:
/// 1. Sanitise: normalise line endings, strip C0/C1 control characters
///    (keeping tab and newline), collapse NBSP to space, remove
///    zero-width characters and BOM. Smart punctuation is preserved —
///    display-side punctuation normalisation belongs to the renderer.
/// 2. Split into non-empty lines; skip the header line when the first
///    line matches the canonical column names (case-insensitive).
/// 3. Split each line on tab and repair field-count mismatches so every
///    row carries exactly 10 string fields, in source line order.
pub fn ingest(raw_text: &str) -> IngestResult {
    let text = sanitize(raw_text);
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.is_empty()).collect();

    let header_skipped = lines.first().is_some_and(|l| is_header(l));
    let start = usize::from(header_skipped);

    let mut rows = Vec::with_capacity(lines.len().saturating_sub(start));
    let mut repairs = Vec::new();

    for (idx, line) in lines.iter().enumerate().skip(start) {
        let cells: Vec<&str> = line.split('\t').collect();
        let (fields, repair) = arrange_fields(&cells);

        if let Some(kind) = repair {
            repairs.push(RepairNote {
                line_number: idx + 1,
                row_index: rows.len(),
                kind,
            });
        }
        rows.push(Row::from_fields(fields));
    }

    tracing::debug!(
        rows = rows.len(),
        repairs = repairs.len(),
        lines = lines.len(),
        header_skipped,
        "Ingestion complete"
    );

    IngestResult {
        rows,
        repairs,
        lines_processed: lines.len() as u64,
        header_skipped,
    }
}

/// Normalise line endings and strip characters that are never data.
///
/// Keeps: tab, newline, and all printable Unicode (including curly
/// quotes, dashes, and ellipsis). Removes: C0 controls except tab and
/// newline, DEL and C1 controls, zero-width characters, and the BOM.
/// NBSP becomes a regular space.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                // \r\n and bare \r both become a single \n
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\t' | '\n' => out.push(c),
            '\u{0000}'..='\u{0008}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'..='\u{009F}' => {}
            '\u{00A0}' => out.push(' '),
            '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' => {}
            _ => out.push(c),
        }
    }
    out
}

/// A line is the header when its first 10 tab-split fields, trimmed,
/// case-insensitively equal the canonical column names.
fn is_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        return false;
    }
    fields
        .iter()
        .take(FIELD_COUNT)
        .zip(COLUMNS.iter())
        .all(|(field, column)| field.trim().eq_ignore_ascii_case(column))
}

/// Map raw cells onto exactly 10 logical fields, repairing mismatches.
///
/// - Exactly 10 cells: positional 1:1 mapping, no repair.
/// - Fewer: right-pad with empty strings.
/// - More: spill-merge. The first 6 fields (`record_id..clip_url`) and
///   last 2 (`tags, status`) are anchored; interior cells are spillover
///   from stray literal tabs in the free-text columns. One interior
///   cell becomes `quote_text`; with several, the last becomes
///   `tweet_text` and the rest join (space-separated) into `quote_text`.
///   Best-effort heuristic, preserved verbatim for behaviour
///   compatibility: there is no way to distinguish a tab-containing
///   quote from a genuinely present tweet field.
fn arrange_fields(cells: &[&str]) -> ([String; FIELD_COUNT], Option<RepairKind>) {
    let original = cells.len();

    if original == FIELD_COUNT {
        let fields = std::array::from_fn(|i| cells[i].to_string());
        return (fields, None);
    }

    if original < FIELD_COUNT {
        let fields = std::array::from_fn(|i| cells.get(i).map_or_else(String::new, |c| c.to_string()));
        return (
            fields,
            Some(RepairKind::Padded {
                original,
                padded: FIELD_COUNT - original,
            }),
        );
    }

    // More than 10 fields: anchor prefix and suffix, merge the interior.
    let prefix = &cells[..SPILL_PREFIX_FIELDS];
    let suffix = &cells[original - SPILL_SUFFIX_FIELDS..];
    let interior = &cells[SPILL_PREFIX_FIELDS..original - SPILL_SUFFIX_FIELDS];

    let (quote_text, tweet_text) = match interior {
        [] => (String::new(), String::new()),
        [only] => (only.trim().to_string(), String::new()),
        [head @ .., last] => (head.join(" ").trim().to_string(), last.trim().to_string()),
    };

    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (i, cell) in prefix.iter().enumerate() {
        fields[i] = cell.to_string();
    }
    fields[SPILL_PREFIX_FIELDS] = quote_text;
    fields[SPILL_PREFIX_FIELDS + 1] = tweet_text;
    for (i, cell) in suffix.iter().enumerate() {
        fields[FIELD_COUNT - SPILL_SUFFIX_FIELDS + i] = cell.to_string();
    }

    (
        fields,
        Some(RepairKind::SpillMerged {
            original,
            merged: interior.len(),
        }),
    )
}
