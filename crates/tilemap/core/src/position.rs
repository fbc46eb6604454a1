//! Cell coordinates and rectangular cell ranges.
use std::fmt;

/// Discrete cell coordinate on a tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangle of cells, half-open on both axes.
///
/// A cell `(x, y)` lies inside when `x_min <= x < x_max` and
/// `y_min <= y < y_max`. Bounds with `x_max <= x_min` or `y_max <= y_min`
/// contain no cells.
///
/// Edges are `i64` so the exclusive max edge of a cell at `i32::MAX` is
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellBounds {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

impl CellBounds {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x_min: i64, y_min: i64, x_max: i64, y_max: i64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest bounds containing exactly the given cell.
    pub fn of_cell(position: Position) -> Self {
        let (x, y) = (i64::from(position.x), i64::from(position.y));
        Self::new(x, y, x + 1, y + 1)
    }

    pub fn width(&self) -> u64 {
        self.x_max.saturating_sub(self.x_min).max(0) as u64
    }

    pub fn height(&self) -> u64 {
        self.y_max.saturating_sub(self.y_min).max(0) as u64
    }

    /// Number of cells covered by these bounds.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, position: Position) -> bool {
        let (x, y) = (i64::from(position.x), i64::from(position.y));
        x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
    }

    /// Grows the bounds so that `position` is contained.
    #[must_use]
    pub fn encapsulate(self, position: Position) -> Self {
        let cell = Self::of_cell(position);
        if self.is_empty() {
            return cell;
        }

        Self::new(
            self.x_min.min(cell.x_min),
            self.y_min.min(cell.y_min),
            self.x_max.max(cell.x_max),
            self.y_max.max(cell.y_max),
        )
    }

    /// Iterates every cell inside the bounds, column by column.
    ///
    /// The x coordinate is the outer loop and y the inner loop, which fixes the
    /// order in which snapshot records are emitted. Edges outside the `i32`
    /// coordinate space are clipped.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let xs = clip(self.x_min, self.x_max);
        let (y_min, y_max) = (self.y_min, self.y_max);
        xs.filter_map(|x| i32::try_from(x).ok()).flat_map(move |x| {
            clip(y_min, y_max)
                .filter_map(|y| i32::try_from(y).ok())
                .map(move |y| Position::new(x, y))
        })
    }
}

fn clip(min: i64, max: i64) -> std::ops::Range<i64> {
    min.max(i64::from(i32::MIN))..max.min(i64::from(i32::MAX) + 1)
}

impl fmt::Display for CellBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
