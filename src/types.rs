//! Type definitions for formatting-aware numeric input
//!
//! This module defines the values that flow through one keystroke: how a
//! field renders its number, which part of the displayed text is being
//! replaced, and what the field should show afterwards.

use crate::error::FormatSpecError;
use crate::locale::LocaleSettings;

/// Rendering style of a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Plain decimal number, e.g. `1,234.5`
    Decimal,
    /// Currency amount with a fixed number of fraction digits, e.g. `$1,234.50`
    Currency,
    /// Number followed by a percent sign, e.g. `15%`. The value is not scaled.
    PercentSuffix,
}

/// Describes how a field renders and parses its numeric value
///
/// A format is built once per field and never changes afterwards. The
/// grouping and decimal separators are passed in explicitly so that nothing
/// depends on process-wide locale state.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatSpec {
    /// Rendering style
    pub style: NumberStyle,
    /// Separator between groups of three integer digits
    pub grouping_separator: char,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
    /// Whether integer digits are grouped at all
    pub uses_grouping: bool,
    /// Fraction digits always shown, padded with zeros
    pub min_fraction_digits: u32,
    /// Fraction digits kept after rounding
    pub max_fraction_digits: u32,
    /// Fixed text rendered before the number (currency symbol)
    pub prefix: String,
    /// Fixed text rendered after the number (percent sign)
    pub suffix: String,
}

impl NumberFormatSpec {
    /// Decimal style with grouping and up to three fraction digits
    pub fn decimal() -> Self {
        Self {
            style: NumberStyle::Decimal,
            grouping_separator: ',',
            decimal_separator: '.',
            uses_grouping: true,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Currency style with exactly two fraction digits
    ///
    /// An empty `symbol` renders the amount without any currency sign.
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self {
            style: NumberStyle::Currency,
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            prefix: symbol.into(),
            ..Self::decimal()
        }
    }

    /// Whole number followed by `%`, without grouping
    pub fn percent_suffix() -> Self {
        Self {
            style: NumberStyle::PercentSuffix,
            uses_grouping: false,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            suffix: "%".to_string(),
            ..Self::decimal()
        }
    }

    /// Whole number without grouping or decoration
    pub fn integer() -> Self {
        Self {
            uses_grouping: false,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            ..Self::decimal()
        }
    }

    /// Set both separators. They must differ.
    pub fn with_separators(
        mut self,
        grouping: char,
        decimal: char,
    ) -> Result<Self, FormatSpecError> {
        if grouping == decimal {
            return Err(FormatSpecError::SameSeparators(grouping));
        }
        self.grouping_separator = grouping;
        self.decimal_separator = decimal;
        Ok(self)
    }

    /// Set the fraction digit range.
    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Result<Self, FormatSpecError> {
        if min > max {
            return Err(FormatSpecError::FractionDigits { min, max });
        }
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        Ok(self)
    }

    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Take the separators from locale settings.
    ///
    /// The currency symbol is left alone; fields decide for themselves
    /// whether to show it.
    pub fn with_locale(self, locale: &LocaleSettings) -> Result<Self, FormatSpecError> {
        self.with_separators(locale.grouping_separator, locale.decimal_separator)
    }

    /// Checks if `c` is a digit as far as editing is concerned
    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }
}

impl Default for NumberFormatSpec {
    fn default() -> Self {
        Self::decimal()
    }
}

/// Half-open range of `char` offsets into the displayed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditRange {
    pub location: usize,
    pub length: usize,
}

impl EditRange {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Zero-length range, i.e. a plain cursor
    pub fn caret(location: usize) -> Self {
        Self::new(location, 0)
    }

    pub fn upper_bound(&self) -> usize {
        self.location + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Clamp the range into a text of `len` chars
    pub fn clamped(&self, len: usize) -> Self {
        let location = self.location.min(len);
        let length = self.length.min(len - location);
        Self { location, length }
    }

    /// Build a range from UTF-16 code unit offsets, as reported by most
    /// platform text inputs.
    pub fn from_utf16(text: &str, location: usize, length: usize) -> Self {
        let start = utf16_to_char_offset(text, location);
        let end = utf16_to_char_offset(text, location + length);
        Self::new(start, end.saturating_sub(start))
    }
}

/// Result of applying one edit to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// New displayed text
    pub text: String,
    /// New cursor offset in `char`s, always within `0..=text.chars().count()`
    pub cursor_position: usize,
}

impl EditResult {
    /// Cursor offset in UTF-16 code units
    pub fn cursor_position_utf16(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor_position)
            .map(char::len_utf16)
            .sum()
    }
}

/// Convert a UTF-16 offset into a `char` offset, rounding up when the
/// offset points inside a surrogate pair.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return index;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}
