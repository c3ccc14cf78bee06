//! Default dimensions for layout editing.
//!
//! These are the fallback values used by [`crate::config::GridConfig`];
//! deployments override them through configuration, never by editing code.

/// Grid cell edge in pixel units. Every element position is a multiple of this.
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// Editing canvas width in pixel units.
pub const DEFAULT_CANVAS_WIDTH: i32 = 1000;

/// Editing canvas height in pixel units.
pub const DEFAULT_CANVAS_HEIGHT: i32 = 700;

/// Height of one labeling row in pixel units. Spot labels derive their
/// letter from `floor(y / row_height)`.
pub const DEFAULT_ROW_HEIGHT: i32 = 80;
