//! Tip arithmetic and the bounded counters next to the tip and people fields

use rust_decimal::Decimal;

use crate::formatter::format;
use crate::types::NumberFormatSpec;

/// Bill, tip percentage and party size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipCalculator {
    pub bill: Decimal,
    pub tip_percent: u32,
    pub people: u32,
}

impl Default for TipCalculator {
    fn default() -> Self {
        Self {
            bill: Decimal::ONE_HUNDRED,
            tip_percent: 10,
            people: 1,
        }
    }
}

impl TipCalculator {
    /// Tip per person, `None` for an empty party
    pub fn tip(&self) -> Option<Decimal> {
        let people = self.people_divisor()?;
        Some(self.bill / Decimal::ONE_HUNDRED * Decimal::from(self.tip_percent) / people)
    }

    /// Bill plus tip per person, `None` for an empty party
    pub fn total(&self) -> Option<Decimal> {
        let people = self.people_divisor()?;
        let percent = Decimal::ONE_HUNDRED + Decimal::from(self.tip_percent);
        Some(self.bill / Decimal::ONE_HUNDRED * percent / people)
    }

    fn people_divisor(&self) -> Option<Decimal> {
        (self.people > 0).then(|| Decimal::from(self.people))
    }

    /// Titles and formatted amounts for display
    pub fn summary(&self, spec: &NumberFormatSpec) -> TipSummary {
        let per_person = self.people > 1;
        let render = |amount: Option<Decimal>| amount.map(|a| format(a, spec)).unwrap_or_default();
        TipSummary {
            tip_title: if per_person { "Tip (per person)" } else { "Tip" },
            tip: render(self.tip()),
            total_title: if per_person {
                "Total (per person)"
            } else {
                "Total"
            },
            total: render(self.total()),
        }
    }
}

/// What the result area shows. An empty amount means "display nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipSummary {
    pub tip_title: &'static str,
    pub tip: String,
    pub total_title: &'static str,
    pub total: String,
}

/// Increment/decrement control bounded to `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    pub min: u32,
    pub max: u32,
}

impl Stepper {
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    pub fn increment(&self, value: u32) -> u32 {
        value.saturating_add(1).clamp(self.min, self.max)
    }

    pub fn decrement(&self, value: u32) -> u32 {
        value.saturating_sub(1).clamp(self.min, self.max)
    }
}
