//! Numeric input parsing module
//!
//! This module turns whatever is currently displayed in a numeric field back
//! into a canonical decimal value. The main entry point is the `parse` function.

mod combinators;
mod number;

pub use combinators::{NumericPiece, numeric_piece};
pub use number::{parse, parse_clamped};
