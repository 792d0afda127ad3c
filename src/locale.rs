//! Locale support for numeric fields
//!
//! This module loads the built-in table of locale separators and currency
//! symbols. Nothing here reads the process locale: callers pick a locale id
//! and pass the resulting settings into a `NumberFormatSpec`.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::error::LocaleError;

type Result<T> = std::result::Result<T, LocaleError>;

/// Separators and currency symbol of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub currency_symbol: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            currency_symbol: "$".to_string(),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: String) -> Self {
        self.currency_symbol = symbol;
        self
    }
}

/// Holds the parsed locale table
struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global singleton for the embedded table
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            locale_settings: HashMap::new(),
        };

        if let Err(e) = manager.parse_locale_settings(include_str!("locale/locales.toml")) {
            warn!(error = %e, "Failed to load embedded locale data");
        }

        manager
    }

    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, "base", base)?;
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }

            let mut locale_settings = base_settings.clone();
            apply_locale_settings(&mut locale_settings, locale_id, value)?;
            self.locale_settings
                .insert(locale_id.to_string(), locale_settings);
        }

        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Overlay one TOML locale table onto `settings`
fn apply_locale_settings(
    settings: &mut LocaleSettings,
    locale_id: &str,
    value: &toml::Value,
) -> Result<()> {
    let table = value.as_table().ok_or_else(|| {
        LocaleError::ParseError(format!("{locale_id} is not a table"))
    })?;

    if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
        settings.decimal_separator = single_char(locale_id, "decimal", decimal)?;
    }

    if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
        settings.grouping_separator = single_char(locale_id, "group", group)?;
    }

    if let Some(currency) = table.get("currency_symbol").and_then(|v| v.as_str()) {
        settings.currency_symbol = currency.to_string();
    }

    if settings.decimal_separator == settings.grouping_separator {
        return Err(LocaleError::ParseError(format!(
            "{locale_id}: decimal and group separators are both '{}'",
            settings.decimal_separator
        )));
    }

    Ok(())
}

fn single_char(locale_id: &str, key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LocaleError::ParseError(format!(
            "{locale_id}.{key} must be a single character, got {value:?}"
        ))),
    }
}

/// Get locale settings by identifier (e.g., "en_US", "de_DE")
///
/// `de-DE` style identifiers are accepted as well.
pub fn get_locale_settings(locale_id: &str) -> Result<LocaleSettings> {
    let normalized = locale_id.replace('-', "_");
    LocaleManager::get()
        .locale_settings
        .get(&normalized)
        .cloned()
        .ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))
}

/// List all available locale identifiers, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect();
    locales.sort();
    locales
}
