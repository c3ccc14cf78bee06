//! Editing configuration.
//!
//! Grid size, canvas dimensions, and the labeling row height are
//! configuration, not hard-coded values. Defaults live in
//! [`crate::constants`].

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_SIZE, DEFAULT_ROW_HEIGHT,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Grid and canvas settings for one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Grid cell edge in pixel units.
    pub grid_size: i32,
    /// Canvas width in pixel units.
    pub canvas_width: i32,
    /// Canvas height in pixel units.
    pub canvas_height: i32,
    /// Height of one labeling row in pixel units.
    pub row_height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Validates the configuration. All dimensions must be strictly
    /// positive. The row height is not required to be a grid multiple.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            return Err(Error::other(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.canvas_width <= 0 || self.canvas_height <= 0 {
            return Err(Error::other(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.row_height <= 0 {
            return Err(Error::other(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        Ok(())
    }

    /// Canvas width in grid cells.
    pub fn cells_wide(&self) -> i32 {
        self.canvas_width / self.grid_size
    }

    /// Canvas height in grid cells.
    pub fn cells_high(&self) -> i32 {
        self.canvas_height / self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.canvas_width, 1000);
        assert_eq!(config.canvas_height, 700);
        assert_eq!(config.row_height, 80);
        assert_eq!(config.cells_wide(), 50);
        assert_eq!(config.cells_high(), 35);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GridConfig::default();
        config.grid_size = 0;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.row_height = -80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{ "gridSize": 10 }"#).unwrap();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.row_height, 80);
    }
}
