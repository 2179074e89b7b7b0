// QuoteDeck - core/filter.rs
//
// Filter/sort engine over ingested rows. All active filters are
// AND-combined. Core layer: pure logic, no I/O, no UI dependencies.
// Never mutates the input rows or the caller's filter state, and never
// fails for any well-typed input.

use crate::core::date::parse_date_flexible;
use crate::core::model::Row;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort direction for the normalised event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse a user-supplied direction string; anything but "asc" is
    /// the default descending order.
    pub fn from_flag(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

/// Complete filter state. All fields are AND-combined when applied.
///
/// Owned by the presentation layer and rebuilt/reassigned on each
/// interaction; the engine only ever borrows it.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Substring text search (case- and diacritic-insensitive).
    /// Empty = no filter.
    pub query: String,

    /// Exact `event_type` match (case-insensitive). Empty = all types.
    pub event_type: String,

    /// Exact `status` match (case-insensitive). Empty = all statuses.
    pub status: String,

    /// Active tag; the row's tag set must contain it (case-insensitive).
    /// Empty = no tag filter.
    pub tag: String,

    /// Sort direction over the normalised event date.
    pub sort: SortOrder,

    /// Raw range start, ISO or M/D/YYYY. Empty or unparsable = unbounded.
    pub date_start: String,

    /// Raw range end, ISO or M/D/YYYY. Empty or unparsable = unbounded.
    pub date_end: String,
}

impl FilterState {
    /// Returns true if no filters are active (sort direction aside).
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.event_type.is_empty()
            && self.status.is_empty()
            && self.tag.is_empty()
            && self.date_start.is_empty()
            && self.date_end.is_empty()
    }
}

/// Apply filters and sort, returning a new sequence of matching rows.
///
/// Matching is AND-combined across query, type, status, tag, and date
/// range (see the field docs on `FilterState`). The result is sorted by
/// normalised event date in `state.sort` order; rows whose date cannot
/// be normalised carry the empty key and sort before all real dates.
/// The sort is stable: rows with equal keys keep their ingestion order.
pub fn filter_rows(rows: &[Row], state: &FilterState) -> Vec<Row> {
    let query = fold(&state.query);
    let type_filter = state.event_type.to_lowercase();
    let status_filter = state.status.to_lowercase();
    let tag_filter = state.tag.trim().to_lowercase();
    let start = parse_date_flexible(&state.date_start);
    let end = parse_date_flexible(&state.date_end);

    // Decorate each match with its normalised date once, so the sort
    // comparator and the range check agree for every input string.
    let mut keyed: Vec<(String, Row)> = rows
        .iter()
        .filter(|row| {
            matches_query(row, &query)
                && matches_field(&row.event_type, &type_filter)
                && matches_field(&row.status, &status_filter)
                && matches_tag(row, &tag_filter)
                && matches_date_range(row, &start, &end)
        })
        .map(|row| {
            let key = parse_date_flexible(&row.event_date).unwrap_or_default();
            (key, row.clone())
        })
        .collect();

    // Vec::sort_by is stable, so equal keys retain ingestion order in
    // both directions.
    keyed.sort_by(|(a, _), (b, _)| match state.sort {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Case- and diacritic-insensitive text fold: lowercase, NFKD
/// decomposition, combining marks stripped.
fn fold(s: &str) -> String {
    s.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Substring match of the folded query against the folded concatenation
/// of the free-text columns. Empty query matches everything.
fn matches_query(row: &Row, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = fold(&format!(
        "{} {} {} {} {}",
        row.quote_text, row.tweet_text, row.event_title, row.show_or_host, row.tags
    ));
    haystack.contains(query)
}

/// Exact case-insensitive equality against a pre-lowercased filter
/// value. Empty filter matches everything.
fn matches_field(value: &str, filter_lower: &str) -> bool {
    filter_lower.is_empty() || value.to_lowercase() == filter_lower
}

/// The row's pipe-split tag set must contain the active tag,
/// case-insensitive. Empty filter matches everything.
fn matches_tag(row: &Row, tag_lower: &str) -> bool {
    if tag_lower.is_empty() {
        return true;
    }
    row.tag_list()
        .iter()
        .any(|t| t.to_lowercase() == tag_lower)
}

/// Inclusive date-range check against normalised bounds.
///
/// With no active bound every row passes. With either bound active, a
/// row whose `event_date` cannot be normalised is excluded.
fn matches_date_range(row: &Row, start: &Option<String>, end: &Option<String>) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let Some(event) = parse_date_flexible(&row.event_date) else {
        return false;
    };
    if let Some(start) = start {
        if event < *start {
            return false;
        }
    }
    if let Some(end) = end {
        if event > *end {
            return false;
        }
    }
    true
}

/// Per-tag row counts over the trimmed pipe-split tags of all rows,
/// ordered by descending count, ties in first-seen order. Grouping is
/// case-sensitive (display keys come straight from the source data).
pub fn tag_counts(rows: &[Row]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        for tag in row.tag_list() {
            match index.get(tag) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.to_string(), counts.len());
                    counts.push((tag.to_string(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(id: &str, date: &str) -> Row {
        Row {
            record_id: id.to_string(),
            event_date: date.to_string(),
            ..Default::default()
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.record_id.as_str()).collect()
    }

    #[test]
    fn test_empty_state_returns_all_sorted_desc() {
        let rows = vec![
            make_row("a", "2024-01-01"),
            make_row("b", "2024-03-01"),
            make_row("c", "2024-02-01"),
        ];
        let result = filter_rows(&rows, &FilterState::default());
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_asc() {
        let rows = vec![
            make_row("a", "2024-01-01"),
            make_row("b", "2024-03-01"),
            make_row("c", "2024-02-01"),
        ];
        let state = FilterState {
            sort: SortOrder::Asc,
            ..Default::default()
        };
        let result = filter_rows(&rows, &state);
        assert_eq!(ids(&result), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_stable_for_equal_and_missing_dates() {
        let rows = vec![
            make_row("a", "2024-01-01"),
            make_row("b", ""),
            make_row("c", "2024-01-01"),
            make_row("d", "unparsable"),
        ];
        let asc = filter_rows(
            &rows,
            &FilterState {
                sort: SortOrder::Asc,
                ..Default::default()
            },
        );
        // Missing/unparsable dates carry the empty key and sort before
        // all real dates ascending; equal keys keep ingestion order.
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

        let desc = filter_rows(&rows, &FilterState::default());
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_query_case_and_diacritic_insensitive() {
        let mut row = make_row("a", "");
        row.quote_text = "Caf\u{00E9} con leche".to_string();
        let rows = vec![row, make_row("b", "")];

        for query in ["cafe", "CAFE", "caf\u{00E9}"] {
            let state = FilterState {
                query: query.to_string(),
                ..Default::default()
            };
            let result = filter_rows(&rows, &state);
            assert_eq!(ids(&result), vec!["a"], "query {query:?}");
        }
    }

    #[test]
    fn test_query_searches_all_text_columns() {
        let mut by_tweet = make_row("a", "");
        by_tweet.tweet_text = "needle in tweet".to_string();
        let mut by_host = make_row("b", "");
        by_host.show_or_host = "Needle Show".to_string();
        let mut by_tags = make_row("c", "");
        by_tags.tags = "misc|needle".to_string();
        let rows = vec![by_tweet, by_host, by_tags, make_row("d", "")];

        let state = FilterState {
            query: "needle".to_string(),
            ..Default::default()
        };
        let result = filter_rows(&rows, &state);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_type_and_status_exact_case_insensitive() {
        let mut a = make_row("a", "");
        a.event_type = "Interview".to_string();
        a.status = "Published".to_string();
        let mut b = make_row("b", "");
        b.event_type = "Interview Extended".to_string();
        b.status = "published".to_string();
        let rows = vec![a, b];

        let state = FilterState {
            event_type: "interview".to_string(),
            ..Default::default()
        };
        // Exact equality: "Interview Extended" does not match.
        assert_eq!(ids(&filter_rows(&rows, &state)), vec!["a"]);

        let state = FilterState {
            status: "PUBLISHED".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &state).len(), 2);
    }

    #[test]
    fn test_tag_filter_case_insensitive() {
        let mut a = make_row("a", "");
        a.tags = "policy | media".to_string();
        let mut b = make_row("b", "");
        b.tags = "economy".to_string();
        let mut c = make_row("c", "");
        c.tags = "POLICY".to_string();
        let rows = vec![a, b, c];

        let state = FilterState {
            tag: "Policy".to_string(),
            ..Default::default()
        };
        let result = filter_rows(&rows, &state);
        assert_eq!(ids(&result), vec!["a", "c"]);
    }

    #[test]
    fn test_date_range_inclusive_and_excludes_unparsable() {
        let rows = vec![
            make_row("empty", ""),
            make_row("before", "2023-12-31"),
            make_row("start", "2024-01-01"),
            make_row("mid", "2024-01-15"),
            make_row("end", "2024-01-31"),
            make_row("after", "2024-02-01"),
        ];
        let state = FilterState {
            date_start: "2024-01-01".to_string(),
            date_end: "2024-01-31".to_string(),
            sort: SortOrder::Asc,
            ..Default::default()
        };
        let result = filter_rows(&rows, &state);
        assert_eq!(ids(&result), vec!["start", "mid", "end"]);
    }

    #[test]
    fn test_date_range_accepts_mdy_bounds_and_open_ends() {
        let rows = vec![make_row("a", "2024-01-15"), make_row("b", "2024-03-15")];

        let state = FilterState {
            date_start: "2/1/2024".to_string(),
            sort: SortOrder::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&filter_rows(&rows, &state)), vec!["b"]);

        let state = FilterState {
            date_end: "2/1/2024".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rows(&rows, &state)), vec!["a"]);
    }

    #[test]
    fn test_garbage_date_bound_is_no_constraint() {
        let rows = vec![make_row("a", ""), make_row("b", "2024-01-15")];
        let state = FilterState {
            date_start: "whenever".to_string(),
            ..Default::default()
        };
        // Unparsable bound normalises to None: no range active, the
        // empty-date row is kept.
        assert_eq!(filter_rows(&rows, &state).len(), 2);
    }

    #[test]
    fn test_combined_filters_anded() {
        let mut a = make_row("a", "2024-01-15");
        a.event_type = "interview".to_string();
        a.quote_text = "the economy is fine".to_string();
        let mut b = make_row("b", "2024-01-15");
        b.event_type = "rally".to_string();
        b.quote_text = "the economy is fine".to_string();
        let mut c = make_row("c", "2024-06-01");
        c.event_type = "interview".to_string();
        c.quote_text = "the economy is fine".to_string();
        let rows = vec![a, b, c];

        let state = FilterState {
            query: "economy".to_string(),
            event_type: "interview".to_string(),
            date_end: "2024-03-01".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rows(&rows, &state)), vec!["a"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let rows = vec![make_row("a", "2024-01-01"), make_row("b", "2024-02-01")];
        let snapshot = rows.clone();
        let state = FilterState {
            query: "a".to_string(),
            ..Default::default()
        };
        let _ = filter_rows(&rows, &state);
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn test_tag_counts_descending_ties_first_seen() {
        let mut a = make_row("a", "");
        a.tags = "media|policy".to_string();
        let mut b = make_row("b", "");
        b.tags = "policy | economy".to_string();
        let mut c = make_row("c", "");
        c.tags = "economy".to_string();
        let rows = vec![a, b, c];

        let counts = tag_counts(&rows);
        assert_eq!(
            counts,
            vec![
                ("policy".to_string(), 2),
                ("economy".to_string(), 2),
                ("media".to_string(), 1),
            ]
        );
    }
}
