use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use numeric_core::{Decimal, NumericConfig, NumericField, Policy, Synchronizer};
use tracing_subscriber::EnvFilter;

/// Line-driven host for a single numeric field.
///
/// Every stdin line is a text edit, except lines starting with `=`, which set
/// the number (`=` alone clears it).
#[derive(Parser)]
#[command(name = "numtext", version, about = "Numeric input field playground")]
struct Cli {
    /// TOML field configuration; flags below override it
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Accept one decimal separator
    #[arg(long = "decimal")]
    decimal: bool,

    /// Accept one negative sign
    #[arg(long = "negative")]
    negative: bool,

    /// Locale tag the symbols are resolved from, e.g. de-DE
    #[arg(short = 'l', long = "locale")]
    locale: Option<String>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the `tracing` fmt subscriber on stderr; its `log` bridge picks up
/// the engine's records. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<NumericConfig, String> {
    let Some(path) = path else {
        return Ok(NumericConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    NumericConfig::from_toml_str(&source).map_err(|e| format!("{}: {e}", path.display()))
}

fn build_field(cli: &Cli) -> Result<Synchronizer, String> {
    let mut config = load_config(cli.config.as_deref())?;
    let policy = config.policy();
    let policy = Policy::new(
        policy.allow_decimal || cli.decimal,
        policy.allow_negative || cli.negative,
    );
    config.allow_decimal = policy.allow_decimal;
    config.allow_negative = policy.allow_negative;
    if let Some(locale) = &cli.locale {
        config.locale = Some(locale.clone());
    }
    Synchronizer::from_config(&config).map_err(|e| e.to_string())
}

fn describe(number: Option<&Decimal>) -> String {
    number.map_or_else(|| "unset".to_string(), ToString::to_string)
}

fn run(field: &mut dyn NumericField) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(value) = line.strip_prefix('=') {
            let value = value.trim();
            let number = if value.is_empty() {
                None
            } else {
                match value.parse::<Decimal>() {
                    Ok(number) => Some(number),
                    Err(e) => {
                        writeln!(stdout, "! not a number: {value:?} ({e:?})")?;
                        continue;
                    }
                }
            };
            let update = field.on_number_set(number);
            writeln!(stdout, "{:?}\t{}", update.text, describe(field.number()))?;
        } else {
            let update = field.on_text_changed(&line);
            let marker = if update.filtered { "*" } else { " " };
            writeln!(
                stdout,
                "{:?}{marker}\t{}",
                update.text,
                describe(update.number.as_ref())
            )?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut field = match build_field(&cli) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    log::debug!(
        target: "numtext",
        "policy={:?} symbols={:?}",
        field.policy(),
        field.symbols()
    );

    match run(&mut field) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
