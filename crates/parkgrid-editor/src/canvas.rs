//! Canvas model for one floor's editing session.
//!
//! Holds the ordered element sequence, the single selection, and answers
//! geometric queries. Pure data plus derivation rules; the interaction
//! state machine lives in [`crate::session`].

use crate::element::{default_size, LayoutElement};
use crate::element_store::ElementStore;
use crate::labels::{row_index, spot_label};
use parkgrid_core::{
    ElementKind, FixtureRecord, GridConfig, LayoutDocument, Orientation, Point, SpotRecord,
    SpotStatus,
};

/// Canvas state managing layout elements and geometric queries.
#[derive(Debug, Clone)]
pub struct LayoutCanvas {
    store: ElementStore,
    selected_id: Option<u64>,
    config: GridConfig,
}

impl LayoutCanvas {
    /// Creates an empty canvas with the given grid configuration.
    pub fn new(config: GridConfig) -> Self {
        Self {
            store: ElementStore::new(),
            selected_id: None,
            config,
        }
    }

    /// The canvas grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the number of elements on the canvas.
    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    /// True when the canvas holds no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Gets a reference to an element by id.
    pub fn element(&self, id: u64) -> Option<&LayoutElement> {
        self.store.get(id)
    }

    /// Iterates elements in draw order (oldest first).
    pub fn elements(&self) -> impl Iterator<Item = &LayoutElement> {
        self.store.iter()
    }

    /// The currently selected element id, if any. At most one element is
    /// selected at a time.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Sets the selection. Selecting an unknown id clears the selection.
    pub fn select(&mut self, id: Option<u64>) {
        self.selected_id = id.filter(|&id| self.store.get(id).is_some());
    }

    /// Places a new element at the snapped position and returns its id.
    ///
    /// Parking spots are tagged `Disponible`, take the given orientation,
    /// and get a freshly derived number. Overlapping placement is permitted
    /// by design; this never fails.
    pub fn add_element(&mut self, kind: ElementKind, at: Point, orientation: Orientation) -> u64 {
        let position = at.snapped(self.config.grid_size);
        let (width, height) = default_size(kind, orientation);
        let id = self.store.generate_id();

        let element = if kind.is_spot() {
            let number = self.derive_number(position.y, None);
            LayoutElement::spot(
                id,
                position.x,
                position.y,
                width,
                height,
                orientation,
                SpotStatus::Disponible,
                number,
            )
        } else {
            LayoutElement::fixture(id, kind, position.x, position.y, width, height)
        };

        tracing::debug!(id, %kind, x = position.x, y = position.y, "placed element");
        self.store.insert(element);
        id
    }

    /// Returns the topmost element whose bounding box contains the point.
    /// Ties break by insertion order, last wins ("newest on top").
    pub fn find_element_at(&self, point: Point) -> Option<u64> {
        self.store
            .iter()
            .rev()
            .find(|e| e.contains(point))
            .map(|e| e.id)
    }

    /// Moves an element to the snapped position. A moved spot gets its
    /// number re-derived from the new row; labels are not stable
    /// identifiers and may change or collide after drags.
    ///
    /// Returns `false` if the id is unknown.
    pub fn move_element(&mut self, id: u64, to: Point) -> bool {
        let position = to.snapped(self.config.grid_size);
        let number = self
            .store
            .get(id)
            .filter(|e| e.is_spot())
            .map(|_| self.derive_number(position.y, Some(id)));

        let Some(element) = self.store.get_mut(id) else {
            return false;
        };
        element.x = position.x;
        element.y = position.y;
        if let Some(number) = number {
            element.number = Some(number);
        }
        true
    }

    /// Flips a parking spot between horizontal and vertical, swapping its
    /// width and height. Involutive. No effect on fixtures.
    pub fn toggle_orientation(&mut self, id: u64) -> bool {
        let Some(element) = self.store.get_mut(id).filter(|e| e.is_spot()) else {
            return false;
        };
        if let Some(orientation) = element.orientation {
            element.orientation = Some(orientation.toggled());
        }
        std::mem::swap(&mut element.width, &mut element.height);
        true
    }

    /// Sets a parking spot's status. Any status is reachable from any
    /// status. No effect on fixtures.
    pub fn set_status(&mut self, id: u64, status: SpotStatus) -> bool {
        let Some(element) = self.store.get_mut(id).filter(|e| e.is_spot()) else {
            return false;
        };
        element.status = Some(status);
        true
    }

    /// Removes an element. Clears the selection if the removed element was
    /// selected. Returns `false` if the id is unknown.
    pub fn remove_element(&mut self, id: u64) -> bool {
        if self.store.remove(id).is_none() {
            return false;
        }
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        tracing::debug!(id, "removed element");
        true
    }

    /// Empties the canvas and clears the selection. No element survives.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selected_id = None;
        tracing::debug!("cleared canvas");
    }

    /// Exports the current elements as a persistence document, partitioned
    /// into spots and fixtures.
    pub fn to_document(&self, floor_id: i64, floor_number: impl Into<String>) -> LayoutDocument {
        let mut doc = LayoutDocument::new(floor_id, floor_number);
        for element in self.store.iter() {
            if element.is_spot() {
                doc.spots.push(SpotRecord {
                    id: element.id,
                    x: element.x,
                    y: element.y,
                    width: element.width,
                    height: element.height,
                    kind: element.kind,
                    status: element.status.unwrap_or(SpotStatus::Disponible),
                    number: element.number.clone().unwrap_or_default(),
                    orientation: element.orientation.unwrap_or(Orientation::Horizontal),
                });
            } else {
                doc.elements.push(FixtureRecord {
                    id: element.id,
                    x: element.x,
                    y: element.y,
                    width: element.width,
                    height: element.height,
                    kind: element.kind,
                    rotation: (element.rotation != 0.0).then_some(element.rotation),
                });
            }
        }
        doc
    }

    /// Replaces the canvas contents with a persisted document. Element ids
    /// are preserved; the id counter continues past the highest loaded id.
    pub fn load_document(&mut self, doc: &LayoutDocument) {
        self.clear();
        let mut max_id = 0;

        for spot in &doc.spots {
            max_id = max_id.max(spot.id);
            self.store.insert(LayoutElement::spot(
                spot.id,
                spot.x,
                spot.y,
                spot.width,
                spot.height,
                spot.orientation,
                spot.status,
                spot.number.clone(),
            ));
        }
        for fixture in &doc.elements {
            max_id = max_id.max(fixture.id);
            let mut element = LayoutElement::fixture(
                fixture.id,
                fixture.kind,
                fixture.x,
                fixture.y,
                fixture.width,
                fixture.height,
            );
            element.rotation = fixture.rotation.unwrap_or(0.0);
            self.store.insert(element);
        }

        self.store.set_next_id(max_id + 1);
        tracing::debug!(elements = self.store.len(), "loaded document");
    }

    /// Derives a number for a spot at the given y, counting the spots
    /// already in that row. `exclude` skips the spot being moved so it
    /// does not count itself.
    fn derive_number(&self, y: i32, exclude: Option<u64>) -> String {
        let row = row_index(y, self.config.row_height);
        let existing = self
            .store
            .iter()
            .filter(|e| e.is_spot() && Some(e.id) != exclude)
            .filter(|e| row_index(e.y, self.config.row_height) == row)
            .count();
        spot_label(row, existing)
    }
}

impl Default for LayoutCanvas {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
