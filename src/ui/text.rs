//! Visual width and padding for text mixing wide glyphs and SGR escapes.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthChar;

fn sgr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9;]*m").expect("static SGR pattern")
    })
}

/// Remove ANSI SGR color/style sequences.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    sgr_pattern().replace_all(s, "")
}

/// Terminal cells `s` occupies: 2 per char unicode-width reports as double
/// width, 1 for everything else, 0 for SGR escapes.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s)
        .chars()
        .map(|ch| match UnicodeWidthChar::width(ch) {
            Some(2) => 2,
            _ => 1,
        })
        .sum()
}

/// Append spaces until `s` is `width` cells wide. Wider input is returned
/// unchanged, never truncated.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + padding);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_is_char_count() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("make dev"), 8);
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("🤖 Bot"), 6);
        assert_eq!(display_width("ＡＢ"), 4);
    }

    #[test]
    fn narrow_non_ascii_counts_single() {
        assert_eq!(display_width("Привет"), 6);
        assert_eq!(display_width("→"), 1);
    }

    // Widths follow unicode-width rather than the raw East_Asian_Width
    // property: wide combining marks count 1, U+17A4 counts 2.
    #[test]
    fn width_follows_unicode_width_tables() {
        let marks = ('\u{302A}'..='\u{302F}').chain(['\u{3099}', '\u{309A}']);
        for ch in marks.chain(['\u{3164}', '\u{16FE4}']) {
            assert_eq!(display_width(&ch.to_string()), 1, "{ch:?}");
        }
        assert_eq!(display_width("\u{17A4}"), 2);
    }

    #[test]
    fn escapes_are_zero_width() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[38;5;1m日\x1b[39m"), 2);
        assert_eq!(strip_ansi("\x1b[1m\x1b[35mT\x1b[0m"), "T");
    }

    #[test]
    fn pad_reaches_target_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        let padded = pad_to_width("\x1b[32m日\x1b[0m", 6);
        assert_eq!(display_width(&padded), 6);
        assert!(padded.ends_with("    "));
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_to_width("toolong", 3), "toolong");
        assert_eq!(pad_to_width("日本", 3), "日本");
    }

    #[cfg(feature = "fuzz-tests")]
    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ascii_width_equals_len(s in "[ -~]{0,64}") {
                prop_assert_eq!(display_width(&s), s.chars().count());
            }

            #[test]
            fn wrapping_in_sgr_keeps_width(s in "\\PC{0,32}", code in 0u8..108) {
                let wrapped = format!("\x1b[{code}m{s}\x1b[0m");
                prop_assert_eq!(display_width(&wrapped), display_width(&s));
            }

            #[test]
            fn padding_is_exact_or_identity(s in "\\PC{0,32}", width in 0usize..80) {
                let padded = pad_to_width(&s, width);
                if display_width(&s) <= width {
                    prop_assert_eq!(display_width(&padded), width);
                } else {
                    prop_assert_eq!(padded, s);
                }
            }
        }
    }
}
