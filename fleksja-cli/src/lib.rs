//! fleksja CLI library
//!
//! This library provides the command-line interface for restoring case and
//! gender onto placeholders in anonymized Polish text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
