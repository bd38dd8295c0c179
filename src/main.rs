// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;

use app_controller::Controller;
use crate::app_config::Config;
use crate::store::CsvStore;

mod app_config;
mod app_controller;
mod client;
mod errors;
mod store;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate configured columns of a CSV file (default command)
    Translate(TranslateArgs),

    /// Show character usage and quota of the configured API key
    Usage,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input CSV file to translate in place
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Column letters to translate (e.g. -C B -C D), overriding the config
    #[arg(short = 'C', long = "column")]
    columns: Vec<String>,

    /// Source language code (e.g. 'DE', 'EN')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'FR', 'ES')
    #[arg(short, long)]
    target_language: Option<String>,
}

/// coltra - Column Translator
///
/// Translates text columns of tabular files through the DeepL API,
/// batching cells under the per-request size limits and writing the
/// results back in place.
#[derive(Parser, Debug)]
#[command(name = "coltra")]
#[command(version = "0.1.0")]
#[command(about = "Batch column translation through DeepL")]
#[command(long_about = "coltra reads text columns from a CSV file, translates them in size-bounded
batches through the DeepL API and writes the translated column back.

EXAMPLES:
    coltra translate data.csv                   # Translate using config defaults
    coltra translate -C B -C D data.csv         # Translate columns B and D
    coltra translate -s EN -t ES data.csv       # Override the language pair
    coltra usage                                # Show character usage and quota

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    defaults are used. The API key comes from the DEEPL_API_KEY environment
    variable or the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(
                    stderr,
                    "\x1B[1;31m{} ERROR {}\x1B[0m",
                    now,
                    record.args()
                ),
                Level::Warn => writeln!(
                    stderr,
                    "\x1B[1;33m{} WARN  {}\x1B[0m",
                    now,
                    record.args()
                ),
                _ => writeln!(stderr, "{} {:5} {}", now, record.level(), record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let mut config = Config::from_file_or_default(&options.config_path)?;

    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }
    CustomLogger::init(config.log_level.to_level_filter())
        .unwrap_or_else(|e| eprintln!("Failed to initialize logger: {}", e));

    match options.command {
        Commands::Translate(args) => {
            if !args.columns.is_empty() {
                config.columns = args.columns.clone();
            }
            if let Some(source) = args.source_language {
                config.source_language = source;
            }
            if let Some(target) = args.target_language {
                config.target_language = target;
            }

            let controller = Controller::with_config(config)?;
            let store = CsvStore::new(&args.input_file);

            info!("translating {}", args.input_file.display());
            if let Err(e) = controller.run(&store).await {
                error!("{}", e);
                return Err(e);
            }
            info!("done");
        }

        Commands::Usage => {
            let controller = Controller::with_config(config)?;
            let report = controller.usage().await?;
            println!(
                "Characters count: {}. Your limit: {}",
                report.character_count, report.character_limit
            );
        }
    }

    Ok(())
}
