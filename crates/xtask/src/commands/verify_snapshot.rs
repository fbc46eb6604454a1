//! Check a snapshot against a content directory
//!
//! Replays the snapshot into scratch grids and reports every record or grid
//! that would be skipped on a real load.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tilemap_content::ContentFactory;
use tilemap_core::{
    DecodeReport, GridRegistry, IssueSeverity, SnapshotDocument, SparseGrid, TileIdentityTable,
    decode,
};

use super::SnapshotLocation;

/// Check a snapshot file against a tile catalog
#[derive(Parser)]
pub struct VerifySnapshot {
    #[command(flatten)]
    location: SnapshotLocation,

    /// Content directory holding `tiles.ron` (and optionally `layouts.ron`)
    #[arg(short, long, value_name = "DIR")]
    content: PathBuf,
}

impl VerifySnapshot {
    pub fn execute(self) -> Result<()> {
        let (repo, document) = self.location.load()?;
        let factory = ContentFactory::new(&self.content);

        let catalog = factory
            .load_catalog()
            .with_context(|| format!("Failed to load catalog from {}", self.content.display()))?;
        let (table, catalog_issues) = TileIdentityTable::build(catalog);
        let layouts = factory.load_layouts(&table)?;
        let check_grids = !layouts.is_empty();

        println!(
            "{} {}",
            style("Verifying:").bold().cyan(),
            repo.path().display()
        );
        println!(
            "{} {} ({} tiles)",
            style("Catalog:").bold().cyan(),
            factory.catalog_path().display(),
            table.len()
        );
        println!();

        for issue in &catalog_issues {
            println!("  {} {}", style("!").yellow().bold(), issue);
        }

        let report = verify(&document, &table, check_grids.then_some(layouts))?;

        for issue in report.issues_with(IssueSeverity::Skipped) {
            println!("  {} {}", style("x").red().bold(), issue);
        }

        if !report.is_complete() {
            println!();
            anyhow::bail!(
                "{} record(s) and {} grid(s) would be skipped on load",
                report.skipped_records,
                report.skipped_grids.len()
            );
        }

        println!(
            "{} {} grid(s), {} record(s) resolve",
            style("ok").green().bold(),
            report.restored_grids,
            report.applied
        );

        Ok(())
    }
}

/// Replay `document` into scratch grids.
///
/// With layouts, only the grids they declare are known; without, every grid
/// named in the document is accepted and only identifiers are checked.
fn verify(
    document: &SnapshotDocument,
    table: &TileIdentityTable,
    layouts: Option<Vec<(String, SparseGrid)>>,
) -> Result<DecodeReport> {
    let mut registry = GridRegistry::new();

    match layouts {
        Some(layouts) => {
            for (name, grid) in layouts {
                registry.register(name, grid)?;
            }
        }
        None => {
            for snapshot in &document.grids {
                if !registry.contains(&snapshot.key) {
                    registry.register(snapshot.key.clone(), SparseGrid::new())?;
                }
            }
        }
    }

    Ok(decode(document, &mut registry, table))
}
