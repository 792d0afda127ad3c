//! Cursor positioning helpers
//!
//! Pure scans over displayed text that tell an edit where the cursor is
//! allowed to land. All offsets are in `char`s.

use crate::types::NumberFormatSpec;

/// Offset of the first digit, or the text length when there is none
///
/// A cursor is never placed before this offset, so a fixed prefix such as a
/// currency symbol cannot be edited into.
pub fn cursor_min_position(text: &str) -> usize {
    text.chars()
        .position(NumberFormatSpec::is_digit)
        .unwrap_or_else(|| text.chars().count())
}

/// Offset just after the last digit, or 0 when there is none
///
/// A cursor is never placed after this offset, so a fixed suffix such as
/// `%` cannot be edited into.
pub fn cursor_max_position(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .rposition(|c| NumberFormatSpec::is_digit(*c))
        .map_or(0, |index| index + 1)
}

/// Offset of the first character after the leading integer digits
///
/// Grouping separators inside the integer part are skipped. Returns the text
/// length when the leading run extends to the end.
pub fn cursor_begin_position(text: &str, grouping_separator: char) -> usize {
    let mut found_digit = false;
    for (position, c) in text.chars().enumerate() {
        let is_digit = NumberFormatSpec::is_digit(c);
        if found_digit {
            if !is_digit && c != grouping_separator {
                return position;
            }
        } else if is_digit {
            found_digit = true;
        }
    }
    text.chars().count()
}

/// Offset just after the first run of consecutive digits
///
/// Used to tell whether an insertion happened right behind the leading
/// digits, e.g. after the placeholder `0`.
pub fn leading_run_end(text: &str) -> usize {
    let mut found_digit = false;
    for (position, c) in text.chars().enumerate() {
        let is_digit = NumberFormatSpec::is_digit(c);
        if found_digit && !is_digit {
            return position;
        }
        found_digit |= is_digit;
    }
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_position() {
        assert_eq!(cursor_min_position("1,234"), 0);
        assert_eq!(cursor_min_position("$1,234"), 1);
        assert_eq!(cursor_min_position("CHF 5"), 4);
        assert_eq!(cursor_min_position("%"), 1);
        assert_eq!(cursor_min_position(""), 0);
    }

    #[test]
    fn test_max_position() {
        assert_eq!(cursor_max_position("15%"), 2);
        assert_eq!(cursor_max_position("1,234.50"), 8);
        assert_eq!(cursor_max_position("5 €"), 1);
        assert_eq!(cursor_max_position("$"), 0);
        assert_eq!(cursor_max_position(""), 0);
    }

    #[test]
    fn test_begin_position() {
        assert_eq!(cursor_begin_position("1,234.50", ','), 5);
        assert_eq!(cursor_begin_position("$1,234.50", ','), 6);
        assert_eq!(cursor_begin_position("12%", ','), 2);
        assert_eq!(cursor_begin_position("1,234", ','), 5);
        assert_eq!(cursor_begin_position("1.234,5", '.'), 5);
    }

    #[test]
    fn test_leading_run_end() {
        assert_eq!(leading_run_end("0"), 1);
        assert_eq!(leading_run_end("0.00"), 1);
        assert_eq!(leading_run_end("1,234"), 1);
        assert_eq!(leading_run_end("$25.00"), 3);
        assert_eq!(leading_run_end("$"), 1);
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        assert_eq!(cursor_min_position("€12"), 1);
        assert_eq!(cursor_max_position("12 ₽"), 2);
        assert_eq!(cursor_begin_position("₹1,000.00", ','), 6);
    }
}
