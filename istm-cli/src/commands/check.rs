//! Check command implementation

use super::GlobalArgs;
use crate::error::{CliError, CliResult};
use istm_core::DictionaryStore;

/// Load the configured dictionary without caching it
pub fn execute(global: &GlobalArgs) -> CliResult<()> {
    let store = DictionaryStore::new(global.store_config()?);
    let path = store.config().path.display().to_string();
    log::info!("Checking dictionary {path}");

    let dictionary = store.try_load().map_err(CliError::from)?;
    if dictionary.is_empty() {
        log::warn!("Dictionary {path} has no entries");
    }
    println!(
        "{path}: ok ({} top-level keys, {} format)",
        dictionary.root().len(),
        format_name(&store)
    );
    Ok(())
}

fn format_name(store: &DictionaryStore) -> &'static str {
    match store.config().resolved_format() {
        istm_core::DictionaryFormat::Yaml => "yaml",
        istm_core::DictionaryFormat::Toml => "toml",
    }
}
