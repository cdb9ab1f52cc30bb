//! Error chains and localized error recovery

use crate::localized::LocalizedError;
use std::error::Error;

/// Iterator over an error and its chain of sources, outermost first
#[derive(Debug, Clone)]
pub struct ErrorChain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> ErrorChain<'a> {
    /// Start a chain at `error`
    pub fn new(error: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(error) }
    }
}

impl<'a> Iterator for ErrorChain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// First [`LocalizedError`] in the chain of `error`
pub fn find_localized<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a LocalizedError> {
    ErrorChain::new(error).find_map(|cause| cause.downcast_ref::<LocalizedError>())
}

/// The [`LocalizedError`] inside `error`, or `error` itself when there is none
pub fn unwrap_error<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    match find_localized(error) {
        Some(localized) => localized,
        None => error,
    }
}
