//! Bounds for a numeric field

use rust_decimal::Decimal;

use crate::error::BoundsError;

/// Clamps parsed values into `[min, max]`; `max` is optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    min: Decimal,
    max: Option<Decimal>,
}

impl Validator {
    pub fn new(min: Decimal, max: Option<Decimal>) -> Result<Self, BoundsError> {
        if let Some(max) = max {
            if min > max {
                return Err(BoundsError { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Only a lower bound
    pub fn at_least(min: Decimal) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Option<Decimal> {
        self.max
    }

    pub fn clamp(&self, value: Decimal) -> Decimal {
        if value < self.min {
            return self.min;
        }
        match self.max {
            Some(max) if value > max => max,
            _ => value,
        }
    }
}

impl Default for Validator {
    /// Non-negative values without an upper bound
    fn default() -> Self {
        Self::at_least(Decimal::ZERO)
    }
}
