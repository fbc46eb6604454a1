//! Sparse tile-grid snapshots and tile identity resolution.
//!
//! `tilemap-core` defines the data model for named 2D tile grids, the catalog
//! binding tile types to stable symbolic names, and the snapshot codec that
//! converts grids to and from a compact, serializable list of occupied cells.
//!
//! The crate is pure: it never touches the filesystem and never logs. Codec
//! anomalies are returned as [`SnapshotIssue`] values inside
//! [`EncodeReport`] / [`DecodeReport`] so callers decide how to surface them.
//!
//! - [`grid`] holds the [`TileGrid`] contract, the in-memory [`SparseGrid`]
//!   and the name-keyed [`GridRegistry`]
//! - [`identity`] builds the bidirectional [`TileIdentityTable`]
//! - [`snapshot`] defines the persisted document shape
//! - [`codec`] implements [`encode`] and [`decode`]
pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod identity;
pub mod position;
pub mod snapshot;
pub mod tile;

pub use codec::{DecodeReport, EncodeReport, decode, decode_grid, encode, encode_grid};
pub use config::{ParseBoundsError, ScanBounds};
pub use error::{IssueSeverity, RegistryError, SnapshotIssue};
pub use grid::{GridRegistry, SparseGrid, TileGrid};
pub use identity::TileIdentityTable;
pub use position::{CellBounds, Position};
pub use snapshot::{CellPosition, GridSnapshot, SnapshotDocument, SnapshotRecord};
pub use tile::{TerrainKind, TileCatalogEntry, TileDefinition, TileType};
