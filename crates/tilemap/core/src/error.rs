//! Diagnostics and errors raised by the snapshot codec and its tables.
//!
//! Codec anomalies are never fatal. They are collected as [`SnapshotIssue`]
//! values and returned to the caller, which decides whether to log them,
//! display them, or fail a higher-level operation. Only structural misuse of
//! the registry is a hard error ([`RegistryError`]).

use crate::position::Position;

/// Severity level of a [`SnapshotIssue`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssueSeverity {
    /// Some saved or live data was skipped; the operation continued.
    ///
    /// Examples: saved grid missing at load time, identifier dropped from
    /// the catalog between save and load.
    Skipped,

    /// The tile catalog itself is inconsistent.
    ///
    /// These indicate a content-authoring bug and should be fixed at the
    /// source rather than tolerated.
    Authoring,
}

impl IssueSeverity {
    /// Returns true if this issue points at broken content data.
    pub const fn is_authoring(&self) -> bool {
        matches!(self, Self::Authoring)
    }
}

/// A non-fatal anomaly observed while building tables or running the codec.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotIssue {
    /// Saved data names a grid that is not registered.
    #[error("found saved data for grid '{grid}', but no such grid is registered")]
    UnknownGrid { grid: String },

    /// A saved identifier has no binding in the identity table.
    #[error("grid '{grid}': tile '{tile}' at {position} has no catalog binding")]
    UnresolvedTileIdentifier {
        grid: String,
        position: Position,
        tile: String,
    },

    /// A catalog entry reuses a tile type that is already bound.
    #[error("catalog entry '{name}' rejected: its tile type is already bound to '{existing}'")]
    DuplicateTileTypeBinding { name: String, existing: String },

    /// A catalog entry reuses a name already bound to another tile type.
    #[error("catalog entry '{name}' rejected: the name is already bound to another tile type")]
    DuplicateTileName { name: String },

    /// A live tile has no catalog entry, so it was left out of the snapshot.
    #[error("grid '{grid}': tile '{label}' at {position} has no catalog entry and was not saved")]
    UnmappedTileOnSave {
        grid: String,
        position: Position,
        label: String,
    },
}

impl SnapshotIssue {
    pub const fn severity(&self) -> IssueSeverity {
        match self {
            Self::UnknownGrid { .. }
            | Self::UnresolvedTileIdentifier { .. }
            | Self::UnmappedTileOnSave { .. } => IssueSeverity::Skipped,
            Self::DuplicateTileTypeBinding { .. } | Self::DuplicateTileName { .. } => {
                IssueSeverity::Authoring
            }
        }
    }

    /// Stable identifier for this issue kind, suitable for structured logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownGrid { .. } => "unknown_grid",
            Self::UnresolvedTileIdentifier { .. } => "unresolved_tile_identifier",
            Self::DuplicateTileTypeBinding { .. } => "duplicate_tile_type_binding",
            Self::DuplicateTileName { .. } => "duplicate_tile_name",
            Self::UnmappedTileOnSave { .. } => "unmapped_tile_on_save",
        }
    }

    /// Grid the issue refers to, if any.
    pub fn grid(&self) -> Option<&str> {
        match self {
            Self::UnknownGrid { grid }
            | Self::UnresolvedTileIdentifier { grid, .. }
            | Self::UnmappedTileOnSave { grid, .. } => Some(grid),
            Self::DuplicateTileTypeBinding { .. } | Self::DuplicateTileName { .. } => None,
        }
    }
}

/// Errors from registering grids.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("grid '{0}' is already registered")]
    DuplicateGridName(String),
}
