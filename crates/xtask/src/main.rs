//! Development tasks for the tilemap workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, ReadSnapshot, VerifySnapshot};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Development tasks for the tilemap workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for tilemap snapshots", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Read and inspect a snapshot file
    ReadSnapshot(ReadSnapshot),

    /// Check a snapshot file against a tile catalog
    VerifySnapshot(VerifySnapshot),

    /// Delete the saved snapshot
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TILEMAP_SAVE_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ReadSnapshot(cmd) => cmd.execute(),
        Command::VerifySnapshot(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
