//! Delete the saved snapshot
//!
//! Safety: Always prompts for confirmation before deletion.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tilemap_runtime::SnapshotRepository;

use super::SnapshotLocation;

/// Delete the saved snapshot
#[derive(Parser, Debug)]
pub struct Clean {
    #[command(flatten)]
    location: SnapshotLocation,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let repo = self.location.repository();

        if !repo.exists() {
            println!(
                "{}",
                style("Nothing to clean - no snapshot has been saved yet").dim()
            );
            return Ok(());
        }

        println!("{}", style("Clean tilemap snapshot").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("->").cyan(), style(repo.path().display()).dim());
        println!();

        // Confirm deletion
        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        repo.delete()
            .with_context(|| format!("Failed to delete: {}", repo.path().display()))?;

        println!("{}", style("Cleanup complete!").green().bold());

        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
