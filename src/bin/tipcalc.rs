//! Terminal front end for the tip calculator
//!
//! Starts from the configured values, applies the field overrides given on
//! the command line, optionally replays typed keystrokes into a field, and
//! prints the result area.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tip_input::config::CalculatorConfig;
use tip_input::form::{Field, TipForm};
use tip_input::{ConfigError, EditRange};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tipcalc", about = "Split a bill and its tip")]
struct Cli {
    /// TOML configuration with locale and field bounds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bill amount, typed into the bill field
    #[arg(short, long)]
    bill: Option<String>,

    /// Tip percentage, typed into the tip field
    #[arg(short, long)]
    tip: Option<String>,

    /// Number of people, typed into the people field
    #[arg(short, long)]
    people: Option<String>,

    /// Field that --keys are typed into
    #[arg(long, value_enum, default_value_t = FieldArg::Bill)]
    field: FieldArg,

    /// Keystrokes replayed one by one at the cursor; '<' is backspace
    #[arg(long)]
    keys: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldArg {
    Bill,
    Tip,
    People,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Bill => Field::Bill,
            FieldArg::Tip => Field::TipPercent,
            FieldArg::People => Field::People,
        }
    }
}

/// Initialize tracing, `RUST_LOG` overrides the default filter
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tip_input=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Replace the whole field with `text`, the way a paste would
fn type_over(form: &mut TipForm, field: Field, text: &str) {
    let len = form.field(field).text().chars().count();
    form.edit(field, EditRange::new(0, len), text);
}

fn replay_keys(form: &mut TipForm, field: Field, keys: &str) {
    form.field_mut(field).begin_editing();
    for key in keys.chars() {
        let controller = form.field(field);
        let range = match (controller.selection(), key) {
            (Some(selection), _) => selection,
            (None, '<') => EditRange::new(controller.cursor().saturating_sub(1), 1),
            (None, _) => EditRange::caret(controller.cursor()),
        };
        let replacement = if key == '<' { String::new() } else { key.to_string() };
        let result = form.edit(field, range, &replacement);
        println!("{:>4}  {}  (cursor {})", key, result.text, result.cursor_position);
    }
    form.field_mut(field).end_editing();
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };
    info!(locale = %config.locale, "Configuration loaded");

    let mut form = TipForm::new(&config)?;
    for (field, value) in [
        (Field::Bill, &cli.bill),
        (Field::TipPercent, &cli.tip),
        (Field::People, &cli.people),
    ] {
        if let Some(value) = value {
            type_over(&mut form, field, value);
        }
    }

    if let Some(keys) = &cli.keys {
        replay_keys(&mut form, cli.field.into(), keys);
    }

    let summary = form.summary();
    println!("Bill               {}", form.field(Field::Bill).text());
    println!("Tip %              {}", form.field(Field::TipPercent).text());
    println!("Number of people   {}", form.field(Field::People).text());
    println!("{:<18} {}", summary.tip_title, summary.tip);
    println!("{:<18} {}", summary.total_title, summary.total);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tipcalc: {e}");
            ExitCode::FAILURE
        }
    }
}
