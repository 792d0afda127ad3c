use winnow::combinator::alt;
use winnow::token::{any, one_of, take_while};
use winnow::{ModalResult, Parser};

/// One lexical piece of a displayed numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericPiece<'s> {
    /// A run of ASCII digits
    Digits(&'s str),
    /// The field's decimal separator
    DecimalSeparator,
    /// Anything else: grouping separators, currency symbols, suffixes, signs
    Ignored,
}

/// Parse a single piece of a displayed numeric string
///
/// Every branch consumes at least one character, so the parser can be
/// repeated until the input is exhausted.
pub fn numeric_piece<'s>(
    decimal_separator: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<NumericPiece<'s>> {
    move |input: &mut &'s str| {
        alt((
            take_while(1.., |c: char| c.is_ascii_digit()).map(NumericPiece::Digits),
            one_of(decimal_separator).value(NumericPiece::DecimalSeparator),
            any.value(NumericPiece::Ignored),
        ))
        .parse_next(input)
    }
}
