pub mod calculator;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod form;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod transaction;
pub mod types;
pub mod validator;

// Main API
pub use controller::InputController;
pub use error::{BoundsError, ConfigError, FormatSpecError, LocaleError};
pub use formatter::format;
pub use parser::parse;
pub use transaction::apply_edit;
pub use types::*;
pub use validator::Validator;
