//! Bidirectional mapping between catalog names and tile types.
use std::collections::HashMap;

use crate::error::SnapshotIssue;
use crate::tile::{TileCatalogEntry, TileType};

/// Resolves tile types to their catalog names and back.
///
/// Snapshots only ever store names; this table is the single place where a
/// name becomes a live [`TileType`] again. Both directions are functions: a
/// tile type has at most one name and a name denotes at most one tile type.
#[derive(Clone, Debug, Default)]
pub struct TileIdentityTable {
    names: HashMap<TileType, String>,
    tiles: HashMap<String, TileType>,
}

impl TileIdentityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from catalog entries, in catalog order.
    ///
    /// Conflicting entries never replace an existing binding: the first entry
    /// wins and every rejected entry is reported in the returned issues.
    pub fn build<I>(catalog: I) -> (Self, Vec<SnapshotIssue>)
    where
        I: IntoIterator<Item = TileCatalogEntry>,
    {
        let mut table = Self::new();
        let issues = catalog
            .into_iter()
            .filter_map(|entry| table.bind(entry).err())
            .collect();

        (table, issues)
    }

    /// Binds one catalog entry in both directions.
    pub fn bind(&mut self, entry: TileCatalogEntry) -> Result<(), SnapshotIssue> {
        if let Some(existing) = self.names.get(&entry.tile) {
            return Err(SnapshotIssue::DuplicateTileTypeBinding {
                name: entry.name,
                existing: existing.clone(),
            });
        }

        if self.tiles.contains_key(&entry.name) {
            return Err(SnapshotIssue::DuplicateTileName { name: entry.name });
        }

        self.names.insert(entry.tile.clone(), entry.name.clone());
        self.tiles.insert(entry.name, entry.tile);
        Ok(())
    }

    /// Catalog name of a live tile type.
    pub fn name_of(&self, tile: &TileType) -> Option<&str> {
        self.names.get(tile).map(String::as_str)
    }

    /// Live tile type for a catalog name.
    pub fn resolve(&self, name: &str) -> Option<&TileType> {
        self.tiles.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.tiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TerrainKind;

    fn grass() -> TileType {
        TileType::with_terrain("Grass", TerrainKind::Floor)
    }

    #[test]
    fn binds_both_directions() {
        let grass = grass();
        let (table, issues) = TileIdentityTable::build([TileCatalogEntry::new(
            "grass_01",
            grass.clone(),
        )]);

        assert!(issues.is_empty());
        assert_eq!(table.name_of(&grass), Some("grass_01"));
        assert_eq!(table.resolve("grass_01"), Some(&grass));
        assert_eq!(table.resolve("grass_02"), None);
    }

    #[test]
    fn duplicate_tile_type_keeps_first_binding() {
        let grass = grass();
        let (table, issues) = TileIdentityTable::build([
            TileCatalogEntry::new("grass_01", grass.clone()),
            TileCatalogEntry::new("grass_alt", grass.clone()),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.name_of(&grass), Some("grass_01"));
        assert!(!table.contains_name("grass_alt"));
        assert_eq!(
            issues,
            vec![SnapshotIssue::DuplicateTileTypeBinding {
                name: "grass_alt".into(),
                existing: "grass_01".into(),
            }]
        );
    }

    #[test]
    fn duplicate_name_keeps_first_tile_type() {
        let first = grass();
        let second = grass();
        let (table, issues) = TileIdentityTable::build([
            TileCatalogEntry::new("grass_01", first.clone()),
            TileCatalogEntry::new("grass_01", second.clone()),
        ]);

        assert_eq!(table.resolve("grass_01"), Some(&first));
        assert_eq!(table.name_of(&second), None);
        assert_eq!(
            issues,
            vec![SnapshotIssue::DuplicateTileName {
                name: "grass_01".into()
            }]
        );
    }

    #[test]
    fn build_is_deterministic_for_a_fixed_catalog() {
        let shared = grass();
        let catalog = vec![
            TileCatalogEntry::new("b", shared.clone()),
            TileCatalogEntry::new("a", shared.clone()),
        ];

        for _ in 0..3 {
            let (table, issues) = TileIdentityTable::build(catalog.clone());
            assert_eq!(table.name_of(&shared), Some("b"));
            assert_eq!(issues.len(), 1);
        }
    }
}
