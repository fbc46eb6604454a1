//! Persisted snapshot document.
//!
//! The document references tiles only by catalog name. With the `serde`
//! feature it serializes to JSON as:
//!
//! ```text
//! [
//!   { "key": "Ground",
//!     "tiles": [ { "position": { "x": 0, "y": 0, "z": 0 }, "tile": "grass_01" } ] }
//! ]
//! ```
use crate::position::Position;

/// Cell coordinate as stored on disk.
///
/// Grids are planar, so `z` is always written as 0 and ignored when read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: i32,
}

impl CellPosition {
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl From<Position> for CellPosition {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: 0,
        }
    }
}

/// One occupied cell: where it is and which catalog tile occupies it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotRecord {
    pub position: CellPosition,
    pub tile: String,
}

impl SnapshotRecord {
    pub fn new(position: Position, tile: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            tile: tile.into(),
        }
    }
}

/// Records of one grid, in scan order.
///
/// An empty `tiles` list is meaningful: it restores the grid as empty, which
/// differs from leaving the grid out of the document altogether.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub key: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiles: Vec<SnapshotRecord>,
}

impl GridSnapshot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tiles: Vec::new(),
        }
    }

    pub fn with_records(key: impl Into<String>, tiles: Vec<SnapshotRecord>) -> Self {
        Self {
            key: key.into(),
            tiles,
        }
    }
}

/// Every grid captured by one save, in registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SnapshotDocument {
    pub grids: Vec<GridSnapshot>,
}

impl SnapshotDocument {
    pub fn new(grids: Vec<GridSnapshot>) -> Self {
        Self { grids }
    }

    pub fn push(&mut self, grid: GridSnapshot) {
        self.grids.push(grid);
    }

    /// First snapshot stored under `key`.
    pub fn grid(&self, key: &str) -> Option<&GridSnapshot> {
        self.grids.iter().find(|grid| grid.key == key)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Total records across all grids.
    pub fn record_count(&self) -> usize {
        self.grids.iter().map(|grid| grid.tiles.len()).sum()
    }
}
