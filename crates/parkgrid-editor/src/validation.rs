//! Pre-save validation of the live canvas.
//!
//! Run before exporting a document for persistence; a failure aborts the
//! save with no partial write and leaves the in-memory edits untouched.

use crate::canvas::LayoutCanvas;
use parkgrid_core::LayoutError;

/// Validates a canvas for saving: it must hold at least one element and
/// every element must sit on the grid. The canvas enforces grid alignment
/// on every mutation, so `OffGrid` here indicates a corrupted document was
/// loaded.
pub fn validate_canvas(canvas: &LayoutCanvas) -> Result<(), LayoutError> {
    if canvas.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }
    let grid = canvas.config().grid_size;
    for element in canvas.elements() {
        if element.x.rem_euclid(grid) != 0 || element.y.rem_euclid(grid) != 0 {
            return Err(LayoutError::OffGrid {
                id: element.id,
                x: element.x,
                y: element.y,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkgrid_core::{ElementKind, GridConfig, Orientation, Point};

    #[test]
    fn test_empty_canvas_is_invalid() {
        let canvas = LayoutCanvas::new(GridConfig::default());
        assert_eq!(validate_canvas(&canvas), Err(LayoutError::EmptyLayout));
    }

    #[test]
    fn test_populated_canvas_is_valid() {
        let mut canvas = LayoutCanvas::new(GridConfig::default());
        canvas.add_element(
            ElementKind::ParkingSpot,
            Point::new(0, 0),
            Orientation::Horizontal,
        );
        assert_eq!(validate_canvas(&canvas), Ok(()));
    }

    #[test]
    fn test_off_grid_loaded_document_is_rejected() {
        let mut canvas = LayoutCanvas::new(GridConfig::default());
        canvas.add_element(
            ElementKind::ParkingSpot,
            Point::new(0, 0),
            Orientation::Horizontal,
        );
        let mut doc = canvas.to_document(1, "1");
        doc.spots[0].x = 13;

        let mut loaded = LayoutCanvas::new(GridConfig::default());
        loaded.load_document(&doc);
        assert!(matches!(
            validate_canvas(&loaded),
            Err(LayoutError::OffGrid { id: _, x: 13, y: 0 })
        ));
    }
}
