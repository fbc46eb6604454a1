use crate::error::SnapshotIssue;
use crate::grid::{GridRegistry, TileGrid};
use crate::identity::TileIdentityTable;
use crate::snapshot::{GridSnapshot, SnapshotDocument};

use super::DecodeReport;

/// Replays a document onto the registry, in document order.
///
/// Each grid named by the document is cleared and then repopulated from its
/// records; grids the document does not mention are left untouched. Unknown
/// grid names skip that snapshot, unresolved identifiers skip that record.
pub fn decode<G>(
    document: &SnapshotDocument,
    registry: &mut GridRegistry<G>,
    table: &TileIdentityTable,
) -> DecodeReport
where
    G: TileGrid,
{
    let mut report = DecodeReport::default();

    for snapshot in &document.grids {
        let Some(grid) = registry.get_mut(&snapshot.key) else {
            report.skipped_grids.push(snapshot.key.clone());
            report.issues.push(SnapshotIssue::UnknownGrid {
                grid: snapshot.key.clone(),
            });
            continue;
        };

        let (applied, issues) = decode_grid(snapshot, grid, table);

        report.restored_grids += 1;
        report.applied += applied;
        report.skipped_records += issues.len();
        report.issues.extend(issues);
    }

    report
}

/// Clears `grid` and writes every resolvable record of `snapshot` into it.
///
/// Records sharing a position resolve last-write-wins. Returns the number of
/// records written and one issue per unresolved identifier.
pub fn decode_grid<G>(
    snapshot: &GridSnapshot,
    grid: &mut G,
    table: &TileIdentityTable,
) -> (usize, Vec<SnapshotIssue>)
where
    G: TileGrid + ?Sized,
{
    grid.clear_all_tiles();

    let mut applied = 0;
    let mut issues = Vec::new();

    for record in &snapshot.tiles {
        let position = record.position.position();
        match table.resolve(&record.tile) {
            Some(tile) => {
                grid.set_tile(position, tile.clone());
                applied += 1;
            }
            None => issues.push(SnapshotIssue::UnresolvedTileIdentifier {
                grid: snapshot.key.clone(),
                position,
                tile: record.tile.clone(),
            }),
        }
    }

    (applied, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SparseGrid;
    use crate::position::Position;
    use crate::snapshot::SnapshotRecord;
    use crate::tile::{TerrainKind, TileCatalogEntry, TileType};

    #[test]
    fn last_record_wins_on_collision() {
        let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
        let water = TileType::with_terrain("Water", TerrainKind::Water);
        let (table, _) = TileIdentityTable::build([
            TileCatalogEntry::new("grass_01", grass),
            TileCatalogEntry::new("water_01", water.clone()),
        ]);
        let snapshot = GridSnapshot::with_records(
            "Ground",
            vec![
                SnapshotRecord::new(Position::ORIGIN, "grass_01"),
                SnapshotRecord::new(Position::ORIGIN, "water_01"),
            ],
        );
        let mut grid = SparseGrid::new();

        let (applied, issues) = decode_grid(&snapshot, &mut grid, &table);

        assert_eq!(applied, 2);
        assert!(issues.is_empty());
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.tile(Position::ORIGIN), Some(&water));
    }

    #[test]
    fn unknown_grid_is_reported_and_skipped() {
        let wall = TileType::with_terrain("Wall", TerrainKind::Wall);
        let (table, _) = TileIdentityTable::build([TileCatalogEntry::new("wall_01", wall.clone())]);
        let mut registry = GridRegistry::new();
        registry
            .register("Walls", SparseGrid::with_tiles([(Position::ORIGIN, wall)]))
            .unwrap();
        let document = SnapshotDocument::new(vec![GridSnapshot::with_records(
            "Roof",
            vec![SnapshotRecord::new(Position::ORIGIN, "wall_01")],
        )]);

        let report = decode(&document, &mut registry, &table);

        assert_eq!(report.skipped_grids, vec!["Roof".to_string()]);
        assert_eq!(report.restored_grids, 0);
        assert_eq!(
            report.issues,
            vec![SnapshotIssue::UnknownGrid {
                grid: "Roof".into()
            }]
        );
        assert_eq!(registry.get("Walls").unwrap().occupied_count(), 1);
    }
}
