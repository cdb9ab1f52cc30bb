//! Lookup command implementation

use super::{cli_arg, GlobalArgs};
use crate::error::{CliError, CliResult};
use crate::output::MessageRecord;
use clap::Args;
use istm_core::{Arg, KeyPath};

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Dotted key path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// printf arguments applied to the template as they are
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

impl LookupArgs {
    /// Execute the lookup command
    ///
    /// Fails after printing when the path does not resolve and no arguments
    /// were given.
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let store = global.install()?;
        let args: Vec<Arg> = self.args.iter().map(|raw| cli_arg(raw)).collect();
        let resolution = store.resolve(&KeyPath::parse_dotted(&self.path), &args);
        let resolved = resolution.resolved;

        global.emit(&[MessageRecord {
            key: self.path.clone(),
            locale: store.locale().to_string(),
            message: resolution.into_message(),
            resolved: Some(resolved),
        }])?;

        if !resolved && args.is_empty() {
            return Err(CliError::Unresolved(self.path.clone()).into());
        }
        Ok(())
    }
}
