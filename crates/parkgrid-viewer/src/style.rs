//! Visual styling keyed by element kind and spot status.
//!
//! The palette mirrors the console's stylesheet: pastel fills for spot
//! states, neutral greys for structure, gold for elevators.

use parkgrid_core::{ElementKind, SpotStatus};
use serde::Serialize;

/// Outline shape of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualShape {
    /// Rectangle with slightly rounded corners.
    Rounded,
    /// Plain rectangle.
    Rect,
    /// Circle inscribed in the bounding box.
    Circle,
}

/// Border treatment of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
}

/// Resolved visual style for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// Fill color, CSS hex.
    pub fill: &'static str,
    /// Border color, CSS hex.
    pub border_color: &'static str,
    /// Border width in pixels.
    pub border_width: u8,
    pub border_style: BorderStyle,
    pub shape: VisualShape,
    /// Fixed glyph drawn inside the element, if any.
    pub glyph: Option<&'static str>,
    /// Whether the element reacts to clicks.
    pub interactive: bool,
}

fn spot_fill(status: Option<SpotStatus>) -> &'static str {
    match status {
        Some(SpotStatus::Disponible) => "#d4edda",
        Some(SpotStatus::Ocupado) => "#f8d7da",
        Some(SpotStatus::Reservado) => "#fff3cd",
        _ => "#f8f9fa",
    }
}

/// Resolves the style for an element. Only `(ParkingSpot, status)` varies
/// by status; fixtures have fixed styles.
pub fn style_for(kind: ElementKind, status: Option<SpotStatus>) -> ElementStyle {
    match kind {
        ElementKind::ParkingSpot => ElementStyle {
            fill: spot_fill(status),
            border_color: "#333",
            border_width: 2,
            border_style: BorderStyle::Solid,
            shape: VisualShape::Rounded,
            glyph: None,
            interactive: true,
        },
        ElementKind::Wall => ElementStyle {
            fill: "#666",
            border_color: "#333",
            border_width: 1,
            border_style: BorderStyle::Solid,
            shape: VisualShape::Rect,
            glyph: None,
            interactive: false,
        },
        ElementKind::Pillar => ElementStyle {
            fill: "#999",
            border_color: "#333",
            border_width: 2,
            border_style: BorderStyle::Solid,
            shape: VisualShape::Circle,
            glyph: None,
            interactive: false,
        },
        ElementKind::Stairs => ElementStyle {
            fill: "#e0e0e0",
            border_color: "#666",
            border_width: 2,
            border_style: BorderStyle::Dashed,
            shape: VisualShape::Rect,
            glyph: Some("🪜"),
            interactive: false,
        },
        ElementKind::Elevator => ElementStyle {
            fill: "#ffd700",
            border_color: "#333",
            border_width: 2,
            border_style: BorderStyle::Solid,
            shape: VisualShape::Rounded,
            glyph: Some("🛗"),
            interactive: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_fill_tracks_status() {
        assert_eq!(
            style_for(ElementKind::ParkingSpot, Some(SpotStatus::Disponible)).fill,
            "#d4edda"
        );
        assert_eq!(
            style_for(ElementKind::ParkingSpot, Some(SpotStatus::Ocupado)).fill,
            "#f8d7da"
        );
        assert_eq!(
            style_for(ElementKind::ParkingSpot, Some(SpotStatus::Reservado)).fill,
            "#fff3cd"
        );
        // Out-of-service and missing status fall back to the neutral fill.
        assert_eq!(
            style_for(ElementKind::ParkingSpot, Some(SpotStatus::FueraDeServicio)).fill,
            "#f8f9fa"
        );
        assert_eq!(style_for(ElementKind::ParkingSpot, None).fill, "#f8f9fa");
    }

    #[test]
    fn test_only_spots_are_interactive() {
        assert!(style_for(ElementKind::ParkingSpot, None).interactive);
        for kind in [
            ElementKind::Wall,
            ElementKind::Pillar,
            ElementKind::Stairs,
            ElementKind::Elevator,
        ] {
            assert!(!style_for(kind, None).interactive, "{kind} should be inert");
        }
    }

    #[test]
    fn test_pillars_render_as_circles() {
        assert_eq!(style_for(ElementKind::Pillar, None).shape, VisualShape::Circle);
    }
}
