use crate::config::ScanBounds;
use crate::error::SnapshotIssue;
use crate::grid::{GridRegistry, TileGrid};
use crate::identity::TileIdentityTable;
use crate::position::CellBounds;
use crate::snapshot::{GridSnapshot, SnapshotDocument, SnapshotRecord};

use super::EncodeReport;

/// Captures every registered grid, in registry order.
pub fn encode<G>(
    registry: &GridRegistry<G>,
    table: &TileIdentityTable,
    bounds: ScanBounds,
) -> (SnapshotDocument, EncodeReport)
where
    G: TileGrid,
{
    let mut document = SnapshotDocument::default();
    let mut report = EncodeReport::default();

    for (name, grid) in registry.iter() {
        let (snapshot, issues) = encode_grid(name, grid, table, bounds.resolve(grid));

        report.grids += 1;
        report.records += snapshot.tiles.len();
        report.unmapped += issues.len();
        report.issues.extend(issues);
        document.push(snapshot);
    }

    (document, report)
}

/// Captures the occupied, catalog-mapped cells of one grid inside `scan`.
///
/// Empty cells produce nothing. Cells whose tile has no catalog name are left
/// out and reported as [`SnapshotIssue::UnmappedTileOnSave`].
pub fn encode_grid<G>(
    name: &str,
    grid: &G,
    table: &TileIdentityTable,
    scan: CellBounds,
) -> (GridSnapshot, Vec<SnapshotIssue>)
where
    G: TileGrid + ?Sized,
{
    let mut snapshot = GridSnapshot::new(name);
    let mut issues = Vec::new();

    for (position, tile) in grid.occupied_cells(scan) {
        match table.name_of(tile) {
            Some(identifier) => snapshot.tiles.push(SnapshotRecord::new(position, identifier)),
            None => issues.push(SnapshotIssue::UnmappedTileOnSave {
                grid: name.to_string(),
                position,
                label: tile.label().to_string(),
            }),
        }
    }

    (snapshot, issues)
}
