//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{MessageRecord, OutputFormat};
use anyhow::Context;
use clap::{Args, Subcommand};
use istm_core::{init_global, Arg, DictionaryStore, StoreConfig};
use std::path::PathBuf;

pub mod check;
pub mod demo;
pub mod error_code;
pub mod lookup;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the localized message for an error code
    Error(error_code::ErrorArgs),

    /// Resolve a dotted key path such as dict.word.sbom-form-name
    Lookup(lookup::LookupArgs),

    /// Load the dictionary and report whether it is usable
    Check,

    /// Build E1236, decorate it as a runtime error and print both
    Demo,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        log::debug!("Arguments: {:?}", self);
        match self {
            Commands::Error(args) => args.execute(global),
            Commands::Lookup(args) => args.execute(global),
            Commands::Check => check::execute(global),
            Commands::Demo => demo::execute(global),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Dictionary file (YAML, or TOML by extension)
    #[arg(short, long, value_name = "FILE", env = "ISTM_DICT", global = true)]
    pub dict: Option<PathBuf>,

    /// Locale used for every lookup
    #[arg(short = 'L', long, value_name = "LOCALE", env = "ISTM_LOCALE", global = true)]
    pub locale: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Store configuration from flags, environment and configuration file
    pub fn store_config(&self) -> CliResult<StoreConfig> {
        let file = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        Ok(file.store_config(self.dict.clone(), self.locale.clone()))
    }

    /// Install the process-wide store and load its dictionary
    pub fn install(&self) -> CliResult<&'static DictionaryStore> {
        let store = init_global(self.store_config()?)?;
        store
            .load()
            .with_context(|| format!("cannot use dictionary {}", store.config().path.display()))?;
        Ok(store)
    }

    /// Write records to stdout in the selected format
    pub fn emit(&self, records: &[MessageRecord]) -> CliResult<()> {
        let stdout = std::io::stdout();
        let mut formatter = self.format.formatter(stdout.lock());
        for record in records {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Message argument from the command line
///
/// Integers become integer arguments, everything else is text.
pub fn cli_arg(raw: &str) -> Arg {
    match raw.parse::<i64>() {
        Ok(value) => Arg::Int(value),
        Err(_) => Arg::from(raw),
    }
}
