//! Demo command implementation

use super::GlobalArgs;
use crate::error::CliResult;
use crate::output::MessageRecord;
use istm_core::{localized_error, unwrap_error, Decorated};

/// Render E1236, wrap it as a runtime error, and show what unwrapping returns
pub fn execute(global: &GlobalArgs) -> CliResult<()> {
    let store = global.install()?;
    let locale = store.locale().to_string();

    let error = localized_error!("E1236", "dict.word.sbom-form-name", 2);
    let decorated = Decorated::runtime(error.clone());
    log::debug!("Decorated at {}", decorated.location());

    let record = |key: &str, message: String| MessageRecord {
        key: key.to_string(),
        locale: locale.clone(),
        message,
        resolved: None,
    };
    global.emit(&[
        record("E1236", unwrap_error(&error).to_string()),
        record("E1236", unwrap_error(&decorated).to_string()),
        record(decorated.category(), decorated.to_string()),
    ])
}
