//! Error command implementation

use super::{cli_arg, GlobalArgs};
use crate::error::CliResult;
use crate::output::MessageRecord;
use clap::Args;
use istm_core::{Arg, LocalizedError};

/// Arguments for the error command
#[derive(Debug, Args)]
pub struct ErrorArgs {
    /// Error code, looked up under dict.error
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Message arguments; dotted ones are dictionary paths
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

impl ErrorArgs {
    /// Execute the error command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let store = global.install()?;
        let args: Vec<Arg> = self.args.iter().map(|raw| cli_arg(raw)).collect();
        let error = LocalizedError::new(&self.code, &args);
        log::info!("Rendered error {}", self.code);

        global.emit(&[MessageRecord {
            key: self.code.clone(),
            locale: store.locale().to_string(),
            message: error.into_message(),
            resolved: None,
        }])
    }
}
