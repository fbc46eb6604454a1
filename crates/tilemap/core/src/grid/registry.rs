use std::collections::HashMap;

use super::{SparseGrid, TileGrid};
use crate::error::RegistryError;

/// Name-keyed collection of grids, iterated in registration order.
///
/// Grid names are unique: registering a second grid under an existing name
/// fails and leaves the first grid in place.
#[derive(Debug)]
pub struct GridRegistry<G = SparseGrid> {
    grids: Vec<(String, G)>,
    index: HashMap<String, usize>,
}

impl<G> GridRegistry<G>
where
    G: TileGrid,
{
    pub fn new() -> Self {
        Self {
            grids: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, grid: G) -> Result<(), RegistryError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateGridName(name));
        }

        self.index.insert(name.clone(), self.grids.len());
        self.grids.push((name, grid));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&G> {
        self.index.get(name).map(|&slot| &self.grids[slot].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut G> {
        let slot = *self.index.get(name)?;
        Some(&mut self.grids[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.grids.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &G)> + '_ {
        self.grids.iter().map(|(name, grid)| (name.as_str(), grid))
    }
}

impl<G> Default for GridRegistry<G>
where
    G: TileGrid,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::tile::{TerrainKind, TileType};

    #[test]
    fn iterates_in_registration_order() {
        let mut registry = GridRegistry::<SparseGrid>::new();
        registry.register("Walls", SparseGrid::new()).unwrap();
        registry.register("Ground", SparseGrid::new()).unwrap();
        registry.register("Decor", SparseGrid::new()).unwrap();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Walls", "Ground", "Decor"]);
    }

    #[test]
    fn duplicate_name_is_rejected_and_first_grid_kept() {
        let wall = TileType::with_terrain("Wall", TerrainKind::Wall);
        let mut registry = GridRegistry::new();
        registry
            .register(
                "Walls",
                SparseGrid::with_tiles([(Position::ORIGIN, wall)]),
            )
            .unwrap();

        let err = registry.register("Walls", SparseGrid::new()).unwrap_err();

        assert_eq!(err, RegistryError::DuplicateGridName("Walls".into()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Walls").unwrap().occupied_count(), 1);
    }

    #[test]
    fn boxed_grids_share_one_registry() {
        let mut registry: GridRegistry<Box<dyn TileGrid>> = GridRegistry::new();
        registry
            .register("Ground", Box::new(SparseGrid::new()))
            .unwrap();

        let wall = TileType::with_terrain("Wall", TerrainKind::Wall);
        registry
            .get_mut("Ground")
            .unwrap()
            .set_tile(Position::new(1, 1), wall.clone());

        assert_eq!(
            registry.get("Ground").unwrap().tile(Position::new(1, 1)),
            Some(&wall)
        );
        assert!(registry.get("Missing").is_none());
    }
}
