//! Basic usage of localized errors

use istm_core::{
    find_localized, init_global, localized_error, unwrap_error, DecorateExt, DictionaryStore,
    LocalizedError, StoreConfig,
};
use std::path::Path;

fn parse_count(raw: &str) -> Result<u32, LocalizedError> {
    raw.parse()
        .map_err(|_| localized_error!("E1235", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config.yaml");

    // Method 1: process-wide store
    println!("=== Method 1: Global Store ===");
    init_global(StoreConfig::new(&dictionary))?;
    println!("{}", localized_error!("E1234"));
    println!("{}", localized_error!("E1235", "dict.word.sbom-form-name"));
    println!("{}", localized_error!("E1236", "dict.word.sbom-form-name", 2));
    println!("{}", localized_error!("E9999"));

    // Method 2: recovering the error from a wrapped chain
    println!("\n=== Method 2: Unwrapping ===");
    let wrapped = parse_count("abc").decorate_runtime().unwrap_err();
    println!("wrapped:   {wrapped}");
    println!("unwrapped: {}", unwrap_error(&wrapped));
    if let Some(original) = find_localized(&wrapped) {
        println!("message:   {}", original.message());
    }

    // Method 3: a dedicated store with another locale
    println!("\n=== Method 3: English Store ===");
    let english = DictionaryStore::new(StoreConfig::new(&dictionary).with_locale("en"));
    let err = LocalizedError::with_store(
        &english,
        "E1236",
        &["dict.word.sbom-form-name".into(), 2.into()],
    );
    println!("{err}");
    println!("{}", english.lookup("dict.word.sbom-form-name"));

    Ok(())
}
