//! Text utilities for rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` terminal
/// columns (unicode-aware, so CJK and emoji count double).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "\u{2026}".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('\u{2026}');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate_with_ellipsis("Launch", 10), "Launch");
    }

    #[test]
    fn test_long_strings_get_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Launch Party", 8), "Launch \u{2026}");
    }

    #[test]
    fn test_wide_chars_count_double() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_with_ellipsis("\u{97f3}\u{697d}\u{4f1a}", 5), "\u{97f3}\u{697d}\u{2026}");
    }
}
