//! Grid geometry primitives.
//!
//! Everything in the editor works in integer pixel units; grid alignment is
//! exact, never an epsilon comparison.

use serde::{Deserialize, Serialize};

/// A position in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps both coordinates to the given grid.
    pub fn snapped(&self, grid: i32) -> Self {
        Self {
            x: snap_to_grid(self.x, grid),
            y: snap_to_grid(self.y, grid),
        }
    }
}

/// An axis-aligned rectangle in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks whether the point lies inside this rectangle.
    ///
    /// Edges are half-open: the left/top edge is inside, the right/bottom
    /// edge belongs to the neighbouring cell.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Rounds a coordinate to the nearest multiple of `grid`.
///
/// Uses Euclidean division so negative coordinates snap consistently.
/// Idempotent: snapping an already snapped value is a no-op.
pub fn snap_to_grid(value: i32, grid: i32) -> i32 {
    debug_assert!(grid > 0, "grid size must be positive, got {grid}");
    (value + grid / 2).div_euclid(grid) * grid
}

/// Converts a pixel coordinate to its grid cell index (floor division).
pub fn grid_cell(value: i32, grid: i32) -> i32 {
    debug_assert!(grid > 0, "grid size must be positive, got {grid}");
    value.div_euclid(grid)
}
