//! Pagegist - summarize the readable content of any webpage.

use clap::Parser;
use pagegist_cli::{commands, output, Cli, Command, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> pagegist_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr; stdout carries only the summary text.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load()?;

    match cli.command {
        Command::Summarize(args) => commands::execute_summarize(args, &config).await,
        Command::Key(args) => commands::execute_key(args.command, &mut config),
    }
}
