use std::collections::BTreeMap;

use super::TileGrid;
use crate::position::{CellBounds, Position};
use crate::tile::TileType;

/// In-memory tile grid storing only occupied cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: BTreeMap<Position, TileType>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = (Position, TileType)>,
    {
        Self {
            cells: tiles.into_iter().collect(),
        }
    }

    /// Occupied cells in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &TileType)> + '_ {
        self.cells.iter().map(|(position, tile)| (*position, tile))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl TileGrid for SparseGrid {
    fn cell_bounds(&self) -> CellBounds {
        self.cells
            .keys()
            .fold(None, |bounds: Option<CellBounds>, position| {
                Some(match bounds {
                    Some(bounds) => bounds.encapsulate(*position),
                    None => CellBounds::of_cell(*position),
                })
            })
            .unwrap_or(CellBounds::EMPTY)
    }

    fn tile(&self, position: Position) -> Option<&TileType> {
        self.cells.get(&position)
    }

    fn set_tile(&mut self, position: Position, tile: TileType) {
        self.cells.insert(position, tile);
    }

    fn clear_tile(&mut self, position: Position) {
        self.cells.remove(&position);
    }

    fn clear_all_tiles(&mut self) {
        self.cells.clear();
    }

    fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    // Positions order by x then y, so map order is already scan order.
    fn occupied_cells<'a>(
        &'a self,
        bounds: CellBounds,
    ) -> Box<dyn Iterator<Item = (Position, &'a TileType)> + 'a> {
        Box::new(
            self.iter()
                .filter(move |(position, _)| bounds.contains(*position)),
        )
    }
}

impl FromIterator<(Position, TileType)> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = (Position, TileType)>>(iter: I) -> Self {
        Self::with_tiles(iter)
    }
}
