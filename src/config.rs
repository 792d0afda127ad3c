//! Calculator configuration
//!
//! Field bounds, starting values and the locale, read from TOML. An empty
//! document gives the stock calculator. Counter tables (`tip`, `people`)
//! must list all three keys when present.
//!
//! ```toml
//! locale = "de_DE"
//! currency_symbol = "€"
//!
//! [bill]
//! max = "5000"
//!
//! [people]
//! min = 1
//! max = 20
//! initial = 2
//! ```

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculator::{Stepper, TipCalculator};
use crate::error::ConfigError;
use crate::locale::{LocaleSettings, get_locale_settings};
use crate::types::NumberFormatSpec;
use crate::validator::Validator;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Locale id from the built-in table, e.g. `en_US`
    pub locale: String,
    /// Shown before bill and result amounts; empty by default
    pub currency_symbol: String,
    pub bill: BillConfig,
    pub tip: CounterConfig,
    pub people: CounterConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillConfig {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub initial: Decimal,
}

/// Bounds of a whole-number field with a stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    pub min: u32,
    pub max: u32,
    pub initial: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            currency_symbol: String::new(),
            bill: BillConfig::default(),
            tip: CounterConfig {
                min: 0,
                max: 999_999,
                initial: 10,
            },
            people: CounterConfig {
                min: 1,
                max: 999_999,
                initial: 1,
            },
        }
    }
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from_str("999999999.99").ok(),
            initial: Decimal::ONE_HUNDRED,
        }
    }
}

impl CounterConfig {
    pub fn validator(&self) -> Validator {
        Validator::new(Decimal::from(self.min), Some(Decimal::from(self.max)))
            .unwrap_or_else(|_| Validator::at_least(Decimal::from(self.min)))
    }

    pub fn stepper(&self) -> Stepper {
        Stepper::new(self.min, self.max)
    }
}

impl CalculatorConfig {
    /// Parse a TOML document and check the bounds
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.locale_settings()?;
        self.bill_validator()?;
        for (field, counter) in [("tip", &self.tip), ("people", &self.people)] {
            Validator::new(Decimal::from(counter.min), Some(Decimal::from(counter.max)))
                .map_err(|source| ConfigError::Bounds { field, source })?;
        }
        Ok(())
    }

    pub fn locale_settings(&self) -> Result<LocaleSettings, ConfigError> {
        Ok(get_locale_settings(&self.locale)?)
    }

    pub fn bill_validator(&self) -> Result<Validator, ConfigError> {
        Validator::new(self.bill.min, self.bill.max).map_err(|source| ConfigError::Bounds {
            field: "bill",
            source,
        })
    }

    /// Currency amount for the bill and the results
    pub fn bill_spec(&self) -> Result<NumberFormatSpec, ConfigError> {
        let locale = self.locale_settings()?;
        Ok(NumberFormatSpec::currency(self.currency_symbol.clone()).with_locale(&locale)?)
    }

    pub fn tip_spec(&self) -> Result<NumberFormatSpec, ConfigError> {
        let locale = self.locale_settings()?;
        Ok(NumberFormatSpec::percent_suffix().with_locale(&locale)?)
    }

    pub fn people_spec(&self) -> Result<NumberFormatSpec, ConfigError> {
        let locale = self.locale_settings()?;
        Ok(NumberFormatSpec::integer().with_locale(&locale)?)
    }

    /// Starting values, clamped into their bounds
    pub fn initial_calculator(&self) -> TipCalculator {
        TipCalculator {
            bill: self.bill.initial,
            tip_percent: self.tip.initial.clamp(self.tip.min, self.tip.max.max(self.tip.min)),
            people: self
                .people
                .initial
                .clamp(self.people.min, self.people.max.max(self.people.min)),
        }
    }
}
