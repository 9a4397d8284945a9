//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use pagegist_domain::SummaryStyle;
use std::path::PathBuf;

/// Pagegist - Summarize the readable content of any webpage.
#[derive(Debug, Parser)]
#[command(name = "pagegist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a page, extract its article text, and print a summary
    Summarize(SummarizeArgs),

    /// Manage the stored API key
    Key(KeyArgs),
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// URL of the page to summarize
    pub url: Option<String>,

    /// Read HTML from a local file instead of fetching a URL
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Summary style (unknown values fall back to brief)
    #[arg(short, long, default_value = "brief")]
    pub style: SummaryStyle,

    /// API key, overriding the environment and the config file
    #[arg(long)]
    pub api_key: Option<String>,

    /// Print the extracted text instead of summarizing it
    #[arg(long)]
    pub extract_only: bool,
}

/// Arguments for the key command.
#[derive(Debug, Parser)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub command: KeyCommand,
}

/// Key management subcommands.
#[derive(Debug, Subcommand)]
pub enum KeyCommand {
    /// Store an API key in the config file
    Set {
        /// The API key to store
        key: String,
    },

    /// Show the stored key in masked form
    Show,

    /// Remove the stored key
    Clear,
}
