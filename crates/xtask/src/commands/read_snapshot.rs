//! Read and inspect a saved snapshot
//!
//! Loads the snapshot file (JSON or bincode) and displays its contents.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tilemap_core::{CellBounds, GridSnapshot, SnapshotDocument};

use super::SnapshotLocation;

/// Read and inspect a snapshot file
#[derive(Parser)]
pub struct ReadSnapshot {
    #[command(flatten)]
    location: SnapshotLocation,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (grids, record counts, identifiers in use)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadSnapshot {
    pub fn execute(self) -> Result<()> {
        let (repo, document) = self.location.load()?;
        let file_size = std::fs::metadata(repo.path())
            .with_context(|| format!("Failed to stat snapshot: {}", repo.path().display()))?
            .len();

        // Print header
        println!(
            "{} {}",
            style("Snapshot File:").bold().cyan(),
            repo.path().display()
        );
        println!(
            "{} {} ({})",
            style("File Size:").bold().cyan(),
            format_bytes(file_size),
            repo.format()
        );
        println!();

        match self.output {
            OutputFormat::Summary => print_summary(&document),
            OutputFormat::Json => print_json(&document)?,
            OutputFormat::Debug => print_debug(&document),
        }

        Ok(())
    }
}

fn print_summary(document: &SnapshotDocument) {
    println!("{}", style("=== Snapshot Summary ===").bold().green());
    println!();
    println!("  Grids: {}", document.len());
    println!("  Records: {}", document.record_count());
    println!();

    for grid in &document.grids {
        print_grid(grid);
    }
}

fn print_grid(grid: &GridSnapshot) {
    println!("{}", style(format!("Grid '{}':", grid.key)).bold().yellow());
    println!("  Records: {}", grid.tiles.len());

    if grid.tiles.is_empty() {
        println!("  (cleared on load)");
        println!();
        return;
    }

    let extent = grid
        .tiles
        .iter()
        .map(|record| record.position.position())
        .fold(CellBounds::EMPTY, CellBounds::encapsulate);
    println!("  Extent: {}", extent);

    let mut usage: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &grid.tiles {
        *usage.entry(record.tile.as_str()).or_default() += 1;
    }
    println!("  Tiles:");
    for (tile, count) in usage {
        println!("    {:<24} {}", tile, count);
    }
    println!();
}

fn print_json(document: &SnapshotDocument) -> Result<()> {
    let json =
        serde_json::to_string_pretty(document).context("Failed to serialize snapshot to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(document: &SnapshotDocument) {
    println!("{:#?}", document);
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
