//! Status output helpers.
//!
//! The summary itself goes to stdout; everything else (progress, errors)
//! goes to stderr so the tool composes in pipelines.

use colored::Colorize;

/// Print a progress line to stderr.
pub fn status(message: &str) {
    eprintln!("{}", message.dimmed());
}

/// Print a success line to stderr.
pub fn success(message: &str) {
    eprintln!("{}", message.green());
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
