use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;
use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::parser::combinators::{NumericPiece, numeric_piece};
use crate::types::NumberFormatSpec;
use crate::validator::Validator;

/// Parse the displayed text of a field back into a decimal value
///
/// Everything except ASCII digits and the field's decimal separator is
/// dropped. The first decimal separator starts the fraction; later ones are
/// removed and their digit groups concatenated onto the fraction. Text that
/// does not yield a number parses as 0; a number too large for `Decimal`
/// saturates to `Decimal::MAX` so that an upper bound still applies.
///
/// # Examples
/// ```
/// use tip_input::{parse, NumberFormatSpec};
/// use rust_decimal::Decimal;
///
/// let spec = NumberFormatSpec::currency("$");
/// assert_eq!(parse("$1,234.50", &spec), Decimal::new(123450, 2));
/// assert_eq!(parse("1.2.3", &spec), Decimal::new(123, 2));
/// assert_eq!(parse("abc", &spec), Decimal::ZERO);
/// ```
pub fn parse(text: &str, spec: &NumberFormatSpec) -> Decimal {
    let mut input = text;
    let pieces: ModalResult<Vec<NumericPiece<'_>>> =
        repeat(0.., numeric_piece(spec.decimal_separator)).parse_next(&mut input);
    let pieces = pieces.unwrap_or_default();

    let mut integer = String::new();
    let mut fraction = String::new();
    let mut in_fraction = false;
    for piece in pieces {
        match piece {
            NumericPiece::Digits(digits) if in_fraction => fraction.push_str(digits),
            NumericPiece::Digits(digits) => integer.push_str(digits),
            NumericPiece::DecimalSeparator => in_fraction = true,
            NumericPiece::Ignored => {}
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return Decimal::ZERO;
    }
    if integer.is_empty() {
        integer.push('0');
    }

    let significant_integer_digits = integer.trim_start_matches('0').len();
    let canonical = if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    };

    match Decimal::from_str(&canonical) {
        Ok(value) => value,
        Err(e) if significant_integer_digits > 28 => {
            debug!(input = %text, error = %e, "Numeric input too large, saturating");
            Decimal::MAX
        }
        Err(e) => {
            debug!(input = %text, error = %e, "Unrepresentable numeric input, using 0");
            Decimal::ZERO
        }
    }
}

/// Parse and clamp into the validator's bounds
pub fn parse_clamped(text: &str, spec: &NumberFormatSpec, validator: &Validator) -> Decimal {
    validator.clamp(parse(text, spec))
}
