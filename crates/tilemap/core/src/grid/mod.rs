//! Tile grid contract, the in-memory grid, and the grid registry.
//!
//! The codec only talks to grids through [`TileGrid`], so hosts can register
//! their own cell stores. [`SparseGrid`] is the stock implementation.
mod registry;
mod sparse;

pub use registry::GridRegistry;
pub use sparse::SparseGrid;

use crate::position::{CellBounds, Position};
use crate::tile::TileType;

/// A bounded 2D sparse store of tile occupancy.
pub trait TileGrid {
    /// Smallest bounds containing every occupied cell.
    ///
    /// Returns [`CellBounds::EMPTY`] when the grid has no tiles.
    fn cell_bounds(&self) -> CellBounds;

    fn tile(&self, position: Position) -> Option<&TileType>;

    /// Places `tile` at `position`, replacing any previous occupant.
    fn set_tile(&mut self, position: Position, tile: TileType);

    fn clear_tile(&mut self, position: Position);

    fn clear_all_tiles(&mut self);

    fn occupied_count(&self) -> usize;

    fn has_tile(&self, position: Position) -> bool {
        self.tile(position).is_some()
    }

    /// Occupied cells inside `bounds`, x outer and y inner.
    ///
    /// The default walks every cell of `bounds`; stores that index their
    /// occupied cells should override it.
    fn occupied_cells<'a>(
        &'a self,
        bounds: CellBounds,
    ) -> Box<dyn Iterator<Item = (Position, &'a TileType)> + 'a> {
        Box::new(
            bounds
                .positions()
                .filter_map(move |position| self.tile(position).map(|tile| (position, tile))),
        )
    }
}

impl<G> TileGrid for Box<G>
where
    G: TileGrid + ?Sized,
{
    fn cell_bounds(&self) -> CellBounds {
        (**self).cell_bounds()
    }

    fn tile(&self, position: Position) -> Option<&TileType> {
        (**self).tile(position)
    }

    fn set_tile(&mut self, position: Position, tile: TileType) {
        (**self).set_tile(position, tile)
    }

    fn clear_tile(&mut self, position: Position) {
        (**self).clear_tile(position)
    }

    fn clear_all_tiles(&mut self) {
        (**self).clear_all_tiles()
    }

    fn occupied_count(&self) -> usize {
        (**self).occupied_count()
    }

    fn occupied_cells<'a>(
        &'a self,
        bounds: CellBounds,
    ) -> Box<dyn Iterator<Item = (Position, &'a TileType)> + 'a> {
        (**self).occupied_cells(bounds)
    }
}
