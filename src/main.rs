//! Naughts and crosses - console game binary.

use anyhow::Result;
use clap::Parser;
use naughts_and_crosses::{Cli, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    // Diagnostics go to stderr so the board stays readable on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("starting naughts and crosses");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    info!("session ended");
    Ok(())
}
