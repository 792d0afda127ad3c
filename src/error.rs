//! Error types
//!
//! The per-keystroke path never fails: bad input degrades to the nearest
//! valid value. Errors only come from building a field's configuration.

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid `NumberFormatSpec` construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatSpecError {
    /// Grouping and decimal separators must differ
    #[error("grouping and decimal separator are both '{0}'")]
    SameSeparators(char),

    #[error("minimum fraction digits {min} exceed maximum {max}")]
    FractionDigits { min: u32, max: u32 },
}

/// Invalid `Validator` bounds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validator minimum {min} exceeds maximum {max}")]
pub struct BoundsError {
    pub min: Decimal,
    pub max: Decimal,
}

/// Locale table failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

/// Calculator configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    FormatSpec(#[from] FormatSpecError),

    #[error("{field}: {source}")]
    Bounds {
        field: &'static str,
        #[source]
        source: BoundsError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
