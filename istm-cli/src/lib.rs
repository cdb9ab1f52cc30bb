//! istm CLI library
//!
//! This library provides the command-line interface for rendering and
//! checking istm message dictionaries.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
