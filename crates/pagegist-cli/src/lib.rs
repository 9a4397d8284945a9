//! Pagegist CLI library.
//!
//! This library provides the core functionality for the pagegist
//! command-line interface: configuration management, credential
//! resolution, page fetching, and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
