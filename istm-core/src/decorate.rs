//! Error decoration
//!
//! Wraps an error with a category tag and the call site that wrapped it. The
//! wrapped error stays reachable through [`std::error::Error::source`], so
//! chain searches such as [`crate::unwrap_error`] see through any number of
//! decorations.

use std::error::Error;
use std::panic::Location;
use thiserror::Error;

/// Category for unexpected runtime failures
pub const RUNTIME_ERROR: &str = "runtime_error";

/// Boxed error that can cross threads
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error tagged with a category and the location that tagged it
#[derive(Error, Debug)]
#[error("{category}: {source}")]
pub struct Decorated {
    category: &'static str,
    location: &'static Location<'static>,
    source: BoxError,
}

impl Decorated {
    /// Wrap `error` under `category`, recording the caller's location
    #[track_caller]
    pub fn new(category: &'static str, error: impl Into<BoxError>) -> Self {
        Self {
            category,
            location: Location::caller(),
            source: error.into(),
        }
    }

    /// Wrap `error` as a [`RUNTIME_ERROR`]
    #[track_caller]
    pub fn runtime(error: impl Into<BoxError>) -> Self {
        Self::new(RUNTIME_ERROR, error)
    }

    /// Category tag
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Where the error was wrapped
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The wrapped error
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Unwrap one layer
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Decorate the error side of a `Result`
pub trait DecorateExt<T> {
    /// Wrap the error under `category`
    fn decorate(self, category: &'static str) -> Result<T, Decorated>;

    /// Wrap the error as a [`RUNTIME_ERROR`]
    fn decorate_runtime(self) -> Result<T, Decorated>;
}

impl<T, E> DecorateExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn decorate(self, category: &'static str) -> Result<T, Decorated> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Decorated::new(category, error)),
        }
    }

    #[track_caller]
    fn decorate_runtime(self) -> Result<T, Decorated> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Decorated::runtime(error)),
        }
    }
}
