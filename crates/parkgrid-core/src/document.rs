//! Layout document contracts.
//!
//! Two canonical shapes exist for a persisted floor layout:
//!
//! - [`LayoutDocument`]: what the editor exports and the backend stores,
//!   elements partitioned into `spots` and `elements`, positions in
//!   grid-snapped pixel units.
//! - [`FloorLayout`]: what the viewer consumes, one flat element list with
//!   positions and sizes in grid-cell units, spot fields nested under
//!   `spotData`.
//!
//! Both are JSON with camelCase keys. Conversion between them is lossless
//! for `{id, x, y, width, height, type, status, number, orientation}`.

use crate::config::GridConfig;
use crate::data::{ElementKind, Orientation, SpotStatus};
use crate::error::LayoutError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One exported parking spot, in pixel units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub status: SpotStatus,
    /// Derived display label ("A1", "B3"). Never a persistence key.
    pub number: String,
    pub orientation: Orientation,
}

/// One exported non-spot fixture (wall, pillar, stairs, elevator), in
/// pixel units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Display rotation in degrees; absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// The persisted shape of one floor's element set.
///
/// Replaced wholesale on every save; the backend never merges it with
/// prior state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    pub floor_id: i64,
    pub floor_number: String,
    pub spots: Vec<SpotRecord>,
    pub elements: Vec<FixtureRecord>,
}

/// Spot fields nested under `spotData` in the viewer shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotData {
    pub id: u64,
    pub number: String,
    pub status: SpotStatus,
    pub orientation: Orientation,
}

/// One element in the viewer shape, in grid-cell units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewElement {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_data: Option<SpotData>,
}

/// The viewer-side canonical layout: canvas size in grid cells plus one
/// flat element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorLayout {
    pub width: i32,
    pub height: i32,
    pub grid_size: i32,
    pub elements: Vec<ViewElement>,
}

impl LayoutDocument {
    /// Creates an empty document for a floor.
    pub fn new(floor_id: i64, floor_number: impl Into<String>) -> Self {
        Self {
            floor_id,
            floor_number: floor_number.into(),
            spots: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Total element count across both partitions.
    pub fn element_count(&self) -> usize {
        self.spots.len() + self.elements.len()
    }

    /// Validates the document before a save.
    ///
    /// A layout must contain at least one element and every element must
    /// sit on the grid. Failure aborts the save with no partial write.
    pub fn validate(&self, grid_size: i32) -> std::result::Result<(), LayoutError> {
        if self.element_count() == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        let positions = self
            .spots
            .iter()
            .map(|s| (s.id, s.x, s.y))
            .chain(self.elements.iter().map(|e| (e.id, e.x, e.y)));
        for (id, x, y) in positions {
            if x.rem_euclid(grid_size) != 0 || y.rem_euclid(grid_size) != 0 {
                return Err(LayoutError::OffGrid { id, x, y });
            }
        }
        Ok(())
    }

    /// Projects the document into the viewer shape, converting pixel units
    /// to grid cells.
    pub fn to_floor_layout(&self, config: &GridConfig) -> FloorLayout {
        let grid = config.grid_size;
        let mut elements = Vec::with_capacity(self.element_count());

        for spot in &self.spots {
            elements.push(ViewElement {
                id: spot.id,
                kind: spot.kind,
                x: spot.x.div_euclid(grid),
                y: spot.y.div_euclid(grid),
                width: spot.width.div_euclid(grid),
                height: spot.height.div_euclid(grid),
                rotation: 0.0,
                spot_data: Some(SpotData {
                    id: spot.id,
                    number: spot.number.clone(),
                    status: spot.status,
                    orientation: spot.orientation,
                }),
            });
        }
        for fixture in &self.elements {
            elements.push(ViewElement {
                id: fixture.id,
                kind: fixture.kind,
                x: fixture.x.div_euclid(grid),
                y: fixture.y.div_euclid(grid),
                width: fixture.width.div_euclid(grid),
                height: fixture.height.div_euclid(grid),
                rotation: fixture.rotation.unwrap_or(0.0),
                spot_data: None,
            });
        }

        FloorLayout {
            width: config.cells_wide(),
            height: config.cells_high(),
            grid_size: grid,
            elements,
        }
    }

    /// Saves the document as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        tracing::debug!(path = %path.as_ref().display(), "wrote layout document");
        Ok(())
    }

    /// Loads a document from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let doc: Self = serde_json::from_str(&content).context("Failed to parse layout file")?;
        tracing::debug!(
            path = %path.as_ref().display(),
            elements = doc.element_count(),
            "loaded layout document"
        );
        Ok(doc)
    }
}

impl FloorLayout {
    /// Rebuilds the persistence shape from the viewer shape, converting
    /// grid cells back to pixel units.
    ///
    /// A `parking_spot` element without `spotData` gets the default status
    /// and an empty number; the editor re-derives numbers on load anyway.
    pub fn to_document(&self, floor_id: i64, floor_number: impl Into<String>) -> LayoutDocument {
        let grid = self.grid_size;
        let mut doc = LayoutDocument::new(floor_id, floor_number);

        for element in &self.elements {
            if element.kind.is_spot() {
                let (number, status, orientation) = match &element.spot_data {
                    Some(data) => (data.number.clone(), data.status, data.orientation),
                    None => (String::new(), SpotStatus::Disponible, Orientation::Horizontal),
                };
                doc.spots.push(SpotRecord {
                    id: element.id,
                    x: element.x * grid,
                    y: element.y * grid,
                    width: element.width * grid,
                    height: element.height * grid,
                    kind: element.kind,
                    status,
                    number,
                    orientation,
                });
            } else {
                doc.elements.push(FixtureRecord {
                    id: element.id,
                    x: element.x * grid,
                    y: element.y * grid,
                    width: element.width * grid,
                    height: element.height * grid,
                    kind: element.kind,
                    rotation: (element.rotation != 0.0).then_some(element.rotation),
                });
            }
        }
        doc
    }

    /// Statuses of all spots in the layout, for occupancy stats.
    pub fn spot_statuses(&self) -> impl Iterator<Item = SpotStatus> + '_ {
        self.elements
            .iter()
            .filter_map(|e| e.spot_data.as_ref().map(|d| d.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> LayoutDocument {
        LayoutDocument {
            floor_id: 7,
            floor_number: "1".to_string(),
            spots: vec![SpotRecord {
                id: 1,
                x: 40,
                y: 0,
                width: 40,
                height: 20,
                kind: ElementKind::ParkingSpot,
                status: SpotStatus::Ocupado,
                number: "A2".to_string(),
                orientation: Orientation::Horizontal,
            }],
            elements: vec![FixtureRecord {
                id: 2,
                x: 0,
                y: 80,
                width: 80,
                height: 20,
                kind: ElementKind::Wall,
                rotation: Some(90.0),
            }],
        }
    }

    #[test]
    fn test_document_json_uses_camel_case_and_type_tags() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(json["floorId"], 7);
        assert_eq!(json["floorNumber"], "1");
        assert_eq!(json["spots"][0]["type"], "parking_spot");
        assert_eq!(json["spots"][0]["status"], "Ocupado");
        assert_eq!(json["elements"][0]["type"], "wall");
        assert_eq!(json["elements"][0]["rotation"], 90.0);
    }

    #[test]
    fn test_fixture_rotation_absent_when_zero() {
        let mut doc = sample_document();
        doc.elements[0].rotation = None;
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["elements"][0].get("rotation").is_none());
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        let doc = LayoutDocument::new(1, "1");
        assert_eq!(doc.validate(20), Err(LayoutError::EmptyLayout));
    }

    #[test]
    fn test_validate_rejects_off_grid_elements() {
        let mut doc = sample_document();
        doc.spots[0].x = 35;
        assert_eq!(
            doc.validate(20),
            Err(LayoutError::OffGrid { id: 1, x: 35, y: 0 })
        );
    }

    #[test]
    fn test_floor_layout_nests_spot_data() {
        let layout = sample_document().to_floor_layout(&GridConfig::default());
        assert_eq!(layout.width, 50);
        assert_eq!(layout.height, 35);
        assert_eq!(layout.grid_size, 20);

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["gridSize"], 20);
        assert_eq!(json["elements"][0]["x"], 2);
        assert_eq!(json["elements"][0]["width"], 2);
        assert_eq!(json["elements"][0]["spotData"]["number"], "A2");
        assert!(json["elements"][1].get("spotData").is_none());
    }

    #[test]
    fn test_document_round_trip_is_lossless() {
        let doc = sample_document();
        let layout = doc.to_floor_layout(&GridConfig::default());
        let back = layout.to_document(doc.floor_id, doc.floor_number.clone());
        assert_eq!(back, doc);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("floor1.json");
        let doc = sample_document();
        doc.save_to_file(&path).unwrap();
        let back = LayoutDocument::load_from_file(&path).unwrap();
        assert_eq!(back, doc);
    }
}
