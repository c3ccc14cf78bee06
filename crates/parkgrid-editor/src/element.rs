//! Placed layout elements and their per-kind default sizes.

use parkgrid_core::{ElementKind, Orientation, Point, Rect, SpotStatus};

/// Default size in pixel units for a newly placed element.
///
/// The orientation only matters for parking spots, whose footprint swaps
/// when the orientation toggles. Keyed lookup, no runtime type inspection.
pub fn default_size(kind: ElementKind, orientation: Orientation) -> (i32, i32) {
    match kind {
        ElementKind::ParkingSpot => match orientation {
            Orientation::Horizontal => (40, 20),
            Orientation::Vertical => (20, 40),
        },
        ElementKind::Wall => (80, 20),
        ElementKind::Pillar => (20, 20),
        ElementKind::Stairs => (40, 40),
        ElementKind::Elevator => (40, 40),
    }
}

/// One element placed on the editing canvas.
///
/// `orientation`, `status`, and `number` are populated only for parking
/// spots; fixtures never carry them. `number` is a recomputed projection
/// of position and must never be used as a key; `id` is the only stable
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutElement {
    pub id: u64,
    pub kind: ElementKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub orientation: Option<Orientation>,
    pub status: Option<SpotStatus>,
    pub number: Option<String>,
    pub rotation: f64,
}

impl LayoutElement {
    /// Creates a fixture (non-spot) element.
    pub fn fixture(id: u64, kind: ElementKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            width,
            height,
            orientation: None,
            status: None,
            number: None,
            rotation: 0.0,
        }
    }

    /// Creates a parking spot element.
    pub fn spot(
        id: u64,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        orientation: Orientation,
        status: SpotStatus,
        number: String,
    ) -> Self {
        Self {
            id,
            kind: ElementKind::ParkingSpot,
            x,
            y,
            width,
            height,
            orientation: Some(orientation),
            status: Some(status),
            number: Some(number),
            rotation: 0.0,
        }
    }

    /// True for parking spots.
    pub fn is_spot(&self) -> bool {
        self.kind.is_spot()
    }

    /// The element's axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Checks whether the point lies inside this element.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_size_swaps_with_orientation() {
        let (w, h) = default_size(ElementKind::ParkingSpot, Orientation::Horizontal);
        assert_eq!((w, h), (40, 20));
        let (w, h) = default_size(ElementKind::ParkingSpot, Orientation::Vertical);
        assert_eq!((w, h), (20, 40));
    }

    #[test]
    fn test_fixture_size_ignores_orientation() {
        assert_eq!(
            default_size(ElementKind::Wall, Orientation::Horizontal),
            default_size(ElementKind::Wall, Orientation::Vertical)
        );
    }

    #[test]
    fn test_fixture_carries_no_spot_fields() {
        let wall = LayoutElement::fixture(1, ElementKind::Wall, 0, 0, 80, 20);
        assert!(wall.status.is_none());
        assert!(wall.number.is_none());
        assert!(wall.orientation.is_none());
        assert!(!wall.is_spot());
    }
}
