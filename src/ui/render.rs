// QuoteDeck - ui/render.rs
//
// Text-card rendering to any Write. Presentation glue: consumes the
// core's filtered row sequence and repair diagnostics; holds no state
// of its own.

use crate::core::model::{RepairNote, Row};
use crate::core::text::clean_text;
use std::collections::HashSet;
use std::io::{self, Write};

/// Status line above the cards: match count plus the active tag, if any.
pub fn render_summary<W: Write>(
    writer: &mut W,
    shown: usize,
    total: usize,
    active_tag: &str,
) -> io::Result<()> {
    if active_tag.is_empty() {
        writeln!(writer, "Showing {shown} of {total} quotes.")
    } else {
        writeln!(
            writer,
            "Showing {shown} of {total} quotes \u{00B7} tag: {active_tag}"
        )
    }
}

/// Render rows as text cards.
///
/// `repaired` is the set of rows the ingestion engine repaired; those
/// cards carry a `[repaired]` marker. All free-text fields go through
/// `clean_text` at this point and nowhere earlier — the stored rows keep
/// the source punctuation.
pub fn render_cards<W: Write>(
    writer: &mut W,
    rows: &[Row],
    repaired: &HashSet<Row>,
) -> io::Result<()> {
    for row in rows {
        let marker = if repaired.contains(row) {
            " [repaired]"
        } else {
            ""
        };

        let mut heading = vec![row.record_id.as_str()];
        if !row.event_date.is_empty() {
            heading.push(&row.event_date);
        }
        if !row.event_type.is_empty() {
            heading.push(&row.event_type);
        }
        writeln!(writer, "\u{2500}\u{2500} {}{marker}", heading.join(" \u{00B7} "))?;

        if !row.event_title.is_empty() || !row.show_or_host.is_empty() {
            let title = clean_text(&row.event_title);
            let host = clean_text(&row.show_or_host);
            match (title.is_empty(), host.is_empty()) {
                (false, false) => writeln!(writer, "   {title} ({host})")?,
                (false, true) => writeln!(writer, "   {title}")?,
                (true, false) => writeln!(writer, "   ({host})")?,
                (true, true) => {}
            }
        }

        if !row.quote_text.is_empty() {
            writeln!(writer, "   \"{}\"", clean_text(&row.quote_text))?;
        }
        if !row.tweet_text.is_empty() {
            writeln!(writer, "   tweet: {}", clean_text(&row.tweet_text))?;
        }

        let tags = row.tag_list();
        if !tags.is_empty() || !row.status.is_empty() {
            let mut line = String::from("   ");
            if !tags.is_empty() {
                line.push_str("tags: ");
                line.push_str(&clean_text(&tags.join(", ")));
            }
            if !row.status.is_empty() {
                if !tags.is_empty() {
                    line.push_str("  ");
                }
                line.push_str("status: ");
                line.push_str(&clean_text(&row.status));
            }
            writeln!(writer, "{line}")?;
        }

        if !row.clip_url.is_empty() {
            writeln!(writer, "   clip: {}", row.clip_url)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Tag panel: one line per tag with its row count, in the order the
/// core's `tag_counts` produced (count descending, ties first-seen).
pub fn render_tag_panel<W: Write>(writer: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    for (tag, count) in counts {
        writeln!(writer, "{count:>5}  {}", clean_text(tag))?;
    }
    Ok(())
}

/// Repair diagnostics, one per repaired source line.
pub fn render_repairs<W: Write>(writer: &mut W, repairs: &[RepairNote]) -> io::Result<()> {
    if repairs.is_empty() {
        writeln!(writer, "No repairs were needed.")?;
        return Ok(());
    }
    writeln!(writer, "{} repaired line(s):", repairs.len())?;
    for note in repairs {
        writeln!(writer, "  - {note}")?;
    }
    Ok(())
}
