// QuoteDeck - core/text.rs
//
// Display-side text normalisation. Applied at render time only;
// ingestion deliberately preserves smart punctuation so the stored rows
// stay faithful to the source data.

use regex::Regex;
use std::sync::OnceLock;

/// Normalise a field for display: readable ASCII where it helps, smart
/// punctuation mapped to stable equivalents.
///
/// - NBSP → space; zero-width characters and BOM removed;
/// - curly single/double quotes → ASCII `'` / `"`;
/// - en/em dash directly between word characters gains spacing;
///   remaining en dashes unify to em dash;
/// - ellipsis → `...`; replacement character (U+FFFD) removed.
pub fn clean_text(s: &str) -> String {
    static DASH_BETWEEN_WORDS: OnceLock<Regex> = OnceLock::new();
    let dash_re = DASH_BETWEEN_WORDS.get_or_init(|| {
        Regex::new(r"(\w)[–—](\w)").expect("clean_text: invalid dash regex")
    });

    if s.is_empty() {
        return String::new();
    }

    // Spaces and quotes first, so the dash pass sees the final word chars.
    let mut quoted = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{00A0}' => quoted.push(' '),
            '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' => {}
            '\u{2018}' | '\u{2019}' => quoted.push('\''),
            '\u{201C}' | '\u{201D}' => quoted.push('"'),
            _ => quoted.push(c),
        }
    }

    let spaced = dash_re.replace_all(&quoted, "${1} \u{2014} ${2}");

    let mut out = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        match c {
            '\u{2013}' => out.push('\u{2014}'),
            '\u{2026}' => out.push_str("..."),
            '\u{FFFD}' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_curly_quotes_to_ascii() {
        assert_eq!(
            clean_text("\u{2018}hi\u{2019} \u{201C}there\u{201D}"),
            "'hi' \"there\""
        );
    }

    #[test]
    fn test_dash_between_words_gets_spacing() {
        assert_eq!(clean_text("fact\u{2013}check"), "fact \u{2014} check");
        assert_eq!(clean_text("fact\u{2014}check"), "fact \u{2014} check");
    }

    #[test]
    fn test_standalone_en_dash_unified() {
        assert_eq!(clean_text("a \u{2013} b"), "a \u{2014} b");
    }

    #[test]
    fn test_ellipsis_and_replacement_char() {
        assert_eq!(clean_text("wait\u{2026} what\u{FFFD}"), "wait... what");
    }

    #[test]
    fn test_nbsp_and_zero_width() {
        assert_eq!(clean_text("a\u{00A0}b\u{200B}c"), "a bc");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(clean_text("plain old text"), "plain old text");
    }
}
