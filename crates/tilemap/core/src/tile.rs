//! Tile types and catalog entries.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Canonical terrain classes for tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    Void,
    Water,
    Custom(u16),
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Immutable description of a kind of placeable tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileDefinition {
    label: String,
    terrain: TerrainKind,
}

impl TileDefinition {
    pub fn new(label: impl Into<String>, terrain: TerrainKind) -> Self {
        Self {
            label: label.into(),
            terrain,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }
}

/// Shared handle to a [`TileDefinition`].
///
/// Equality and hashing use the identity of the underlying allocation, never
/// the definition's value: two handles created from equal definitions are
/// different tile types, while clones of one handle are the same tile type.
#[derive(Clone)]
pub struct TileType(Arc<TileDefinition>);

impl TileType {
    pub fn new(definition: TileDefinition) -> Self {
        Self(Arc::new(definition))
    }

    pub fn with_terrain(label: impl Into<String>, terrain: TerrainKind) -> Self {
        Self::new(TileDefinition::new(label, terrain))
    }

    pub fn definition(&self) -> &TileDefinition {
        &self.0
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }

    pub fn terrain(&self) -> TerrainKind {
        self.0.terrain()
    }

    pub fn is_passable(&self) -> bool {
        self.terrain().is_passable()
    }
}

impl PartialEq for TileType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TileType {}

impl Hash for TileType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TileType")
            .field(&self.0.label)
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

/// Binds one [`TileType`] to its stable catalog name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCatalogEntry {
    pub name: String,
    pub tile: TileType,
}

impl TileCatalogEntry {
    pub fn new(name: impl Into<String>, tile: TileType) -> Self {
        Self {
            name: name.into(),
            tile,
        }
    }
}
