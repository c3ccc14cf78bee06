//! Projection of a persisted floor layout into renderable visuals.
//!
//! The projection is deterministic and idempotent: it never mutates its
//! input and re-projecting the same layout yields the same view. Clicking
//! resolves to the spot's data for spots and to nothing for fixtures.

use crate::style::{style_for, ElementStyle};
use parkgrid_core::{
    ElementKind, FloorLayout, OccupancySummary, Point, Rect, SpotData,
};
use serde::Serialize;

/// One element resolved to screen geometry and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVisual {
    pub id: u64,
    pub kind: ElementKind,
    /// Bounding box in pixel units (cell coordinates times grid size).
    pub bounds: Rect,
    /// Display rotation in degrees about the box center.
    pub rotation: f64,
    pub style: ElementStyle,
    /// Text drawn inside the element: the spot number, or the fixture's
    /// fixed glyph.
    pub label: Option<String>,
    /// The spot payload handed to click callbacks; `None` for fixtures.
    pub spot: Option<SpotData>,
}

/// A fully projected floor layout ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutView {
    /// Canvas width in pixel units.
    pub width: i32,
    /// Canvas height in pixel units.
    pub height: i32,
    pub grid_size: i32,
    pub visuals: Vec<ElementVisual>,
}

impl LayoutView {
    /// Projects a persisted layout into visuals.
    pub fn project(layout: &FloorLayout) -> Self {
        let grid = layout.grid_size;
        let visuals = layout
            .elements
            .iter()
            .map(|element| {
                let status = element.spot_data.as_ref().map(|d| d.status);
                let style = style_for(element.kind, status);
                let label = match &element.spot_data {
                    Some(data) => Some(data.number.clone()),
                    None => style.glyph.map(str::to_string),
                };
                ElementVisual {
                    id: element.id,
                    kind: element.kind,
                    bounds: Rect::new(
                        element.x * grid,
                        element.y * grid,
                        element.width * grid,
                        element.height * grid,
                    ),
                    rotation: element.rotation,
                    style,
                    label,
                    spot: element.spot_data.clone(),
                }
            })
            .collect();

        let view = Self {
            width: layout.width * grid,
            height: layout.height * grid,
            grid_size: grid,
            visuals,
        };
        tracing::debug!(elements = view.visuals.len(), "projected layout");
        view
    }

    /// Resolves a click to a parking spot's data. Fixtures are inert and
    /// topmost spots win, consistent with the editor's hit-testing.
    pub fn hit_spot(&self, point: Point) -> Option<&SpotData> {
        self.visuals
            .iter()
            .rev()
            .filter(|v| v.kind.is_spot())
            .find(|v| v.bounds.contains(point))
            .and_then(|v| v.spot.as_ref())
    }

    /// Aggregate spot counts for the stats panel.
    pub fn occupancy(&self) -> OccupancySummary {
        OccupancySummary::from_statuses(
            self.visuals
                .iter()
                .filter_map(|v| v.spot.as_ref().map(|s| s.status)),
        )
    }
}
