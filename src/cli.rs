//! Command-line interface for naughts and crosses.

use clap::Parser;

/// Naughts and crosses - two players take turns at one terminal
#[derive(Parser, Debug)]
#[command(name = "naughts_and_crosses")]
#[command(about = "Two-player console naughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {}
