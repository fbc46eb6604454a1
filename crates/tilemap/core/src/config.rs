//! Scan configuration for the encoder.
use std::fmt;
use std::str::FromStr;

use crate::grid::TileGrid;
use crate::position::CellBounds;

/// Selects the rectangle scanned for each grid during [`crate::encode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanBounds {
    /// Use each grid's own occupied-cell bounds.
    #[default]
    PerGrid,
    /// Use one caller-supplied rectangle for every grid.
    Fixed(CellBounds),
}

impl ScanBounds {
    /// Returns the rectangle to scan for `grid`.
    pub fn resolve<G>(&self, grid: &G) -> CellBounds
    where
        G: TileGrid + ?Sized,
    {
        match self {
            ScanBounds::PerGrid => grid.cell_bounds(),
            ScanBounds::Fixed(bounds) => *bounds,
        }
    }
}

impl fmt::Display for ScanBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanBounds::PerGrid => f.write_str("per-grid"),
            ScanBounds::Fixed(b) => write!(f, "{},{},{},{}", b.x_min, b.y_min, b.x_max, b.y_max),
        }
    }
}

/// Error parsing a [`ScanBounds`] from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid scan bounds '{0}': expected 'per-grid' or 'x_min,y_min,x_max,y_max'")]
pub struct ParseBoundsError(pub String);

impl FromStr for ScanBounds {
    type Err = ParseBoundsError;

    /// Accepts `per-grid` (case-insensitive) or four comma-separated integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("per-grid") || trimmed.eq_ignore_ascii_case("per_grid") {
            return Ok(ScanBounds::PerGrid);
        }

        let values = trimmed
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseBoundsError(s.to_string()))?;

        match values.as_slice() {
            [x_min, y_min, x_max, y_max] => Ok(ScanBounds::Fixed(CellBounds::new(
                *x_min, *y_min, *x_max, *y_max,
            ))),
            _ => Err(ParseBoundsError(s.to_string())),
        }
    }
}
