//! Number formatting module
//!
//! This module renders decimal values as the text a numeric field displays.
//! The main entry point is the `format` function.

mod grouping;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::NumberFormatSpec;
use grouping::group_integer_digits;

/// Format a value according to a field's number format
///
/// The value is rounded half-to-even to `max_fraction_digits`. Trailing
/// fraction zeros are dropped down to `min_fraction_digits` and the fraction
/// is zero-padded up to it. Negative values get a leading `-` in front of
/// the prefix.
///
/// # Examples
/// ```
/// use tip_input::{format, NumberFormatSpec};
/// use rust_decimal::Decimal;
///
/// let spec = NumberFormatSpec::currency("$");
/// assert_eq!(format(Decimal::new(1234567, 1), &spec), "$123,456.70");
/// assert_eq!(format(Decimal::from(15), &NumberFormatSpec::percent_suffix()), "15%");
/// ```
pub fn format(value: Decimal, spec: &NumberFormatSpec) -> String {
    let rounded =
        value.round_dp_with_strategy(spec.max_fraction_digits, RoundingStrategy::MidpointNearestEven);
    let is_negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = rounded.abs().to_string();
    let (integer_part, fraction_part) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (plain.as_str(), ""),
    };

    let min_fraction = spec.min_fraction_digits as usize;
    let mut fraction = fraction_part.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let integer = if spec.uses_grouping {
        group_integer_digits(integer_part, spec.grouping_separator)
    } else {
        integer_part.to_string()
    };

    let mut result = String::with_capacity(
        spec.prefix.len() + integer.len() + fraction.len() + spec.suffix.len() + 2,
    );
    if is_negative {
        result.push('-');
    }
    result.push_str(&spec.prefix);
    result.push_str(&integer);
    if !fraction.is_empty() {
        result.push(spec.decimal_separator);
        result.push_str(&fraction);
    }
    result.push_str(&spec.suffix);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_pads_fraction() {
        let spec = NumberFormatSpec::currency("");
        assert_eq!(format(Decimal::ZERO, &spec), "0.00");
        assert_eq!(format(dec("100"), &spec), "100.00");
        assert_eq!(format(dec("1234.5"), &spec), "1,234.50");
    }

    #[test]
    fn test_rounding_half_even() {
        let spec = NumberFormatSpec::currency("");
        assert_eq!(format(dec("0.125"), &spec), "0.12");
        assert_eq!(format(dec("0.135"), &spec), "0.14");
        assert_eq!(format(dec("999.999"), &spec), "1,000.00");
    }

    #[test]
    fn test_decimal_drops_trailing_zeros() {
        let spec = NumberFormatSpec::decimal();
        assert_eq!(format(dec("1.500"), &spec), "1.5");
        assert_eq!(format(dec("2.000"), &spec), "2");
        assert_eq!(format(dec("1234.56789"), &spec), "1,234.568");
    }

    #[test]
    fn test_percent_suffix() {
        let spec = NumberFormatSpec::percent_suffix();
        assert_eq!(format(dec("15"), &spec), "15%");
        assert_eq!(format(dec("-15"), &spec), "-15%");
        assert_eq!(format(dec("123456"), &spec), "123456%");
    }

    #[test]
    fn test_negative_goes_before_prefix() {
        let spec = NumberFormatSpec::currency("$");
        assert_eq!(format(dec("-1234.5"), &spec), "-$1,234.50");
        assert_eq!(format(dec("-0.001"), &spec), "$0.00");
    }

    #[test]
    fn test_locale_separators() {
        let spec = NumberFormatSpec::currency("")
            .with_separators('.', ',')
            .unwrap();
        assert_eq!(format(dec("1234567.8"), &spec), "1.234.567,80");
    }
}
