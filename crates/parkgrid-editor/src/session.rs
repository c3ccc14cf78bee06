//! Editor session: the interaction state machine over the canvas model.
//!
//! Consumes pointer events and translates them into model mutations. The
//! session owns only what the model does not already expose: the active
//! tool, the edit-mode flag, the global spot orientation, and the transient
//! drag state (selected id + grab offset), which resets on pointer-up.

use crate::canvas::LayoutCanvas;
use parkgrid_core::{ElementKind, GridConfig, Orientation, Point, SpotStatus};

/// The active canvas tool: select/drag, or place a given element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Place(ElementKind),
}

/// What a pointer-down did, for callers that need to re-render or update
/// a properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A new element was placed.
    Placed(u64),
    /// An existing element was selected and a drag began.
    Selected(u64),
    /// Empty canvas was hit; the selection was cleared.
    ClearedSelection,
    /// Edit mode is off; the event was ignored.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    id: u64,
    /// Grab offset: snapped cursor minus element origin, so the element
    /// does not jump under the cursor on the first move.
    offset: Point,
}

/// One floor's editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub canvas: LayoutCanvas,
    tool: Tool,
    edit_mode: bool,
    orientation: Orientation,
    drag: Option<DragState>,
}

impl EditorSession {
    /// Creates a session with an empty canvas. Edit mode starts off and
    /// the default tool places parking spots, matching the hosting view.
    pub fn new(config: GridConfig) -> Self {
        Self {
            canvas: LayoutCanvas::new(config),
            tool: Tool::Place(ElementKind::ParkingSpot),
            edit_mode: false,
            orientation: Orientation::Horizontal,
            drag: None,
        }
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool. Any in-progress drag is dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.drag = None;
    }

    /// Whether pointer input currently mutates the canvas.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Toggles edit mode. Leaving edit mode drops the drag and the
    /// selection; the viewer shows no selection outline.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled {
            self.drag = None;
            self.canvas.select(None);
        }
    }

    /// The orientation applied to subsequently placed spots. Changing it
    /// never touches existing elements.
    pub fn global_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the orientation for future spot placements.
    pub fn set_global_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed on the canvas surface.
    pub fn pointer_down(&mut self, at: Point) -> PointerOutcome {
        if !self.edit_mode {
            return PointerOutcome::Ignored;
        }
        match self.tool {
            Tool::Place(kind) => {
                let id = self.canvas.add_element(kind, at, self.orientation);
                PointerOutcome::Placed(id)
            }
            Tool::Select => match self.canvas.find_element_at(at) {
                Some(id) => {
                    self.canvas.select(Some(id));
                    let snapped = at.snapped(self.canvas.config().grid_size);
                    // element() is present: find_element_at just returned it
                    let origin = self
                        .canvas
                        .element(id)
                        .map(|e| Point::new(e.x, e.y))
                        .unwrap_or(snapped);
                    self.drag = Some(DragState {
                        id,
                        offset: Point::new(snapped.x - origin.x, snapped.y - origin.y),
                    });
                    PointerOutcome::Selected(id)
                }
                None => {
                    self.canvas.select(None);
                    PointerOutcome::ClearedSelection
                }
            },
        }
    }

    /// Pointer moved. While dragging, the element tracks the snapped
    /// cursor minus the grab offset; every move is applied synchronously.
    pub fn pointer_move(&mut self, at: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let snapped = at.snapped(self.canvas.config().grid_size);
        let target = Point::new(snapped.x - drag.offset.x, snapped.y - drag.offset.y);
        self.canvas.move_element(drag.id, target);
    }

    /// Pointer released. Always ends the drag, whatever the prior state.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Rotates the selected spot (orientation toggle + dimension swap).
    pub fn rotate_selected(&mut self) -> bool {
        match self.canvas.selected_id() {
            Some(id) => self.canvas.toggle_orientation(id),
            None => false,
        }
    }

    /// Deletes the selected element.
    pub fn delete_selected(&mut self) -> bool {
        match self.canvas.selected_id() {
            Some(id) => {
                self.drag = None;
                self.canvas.remove_element(id)
            }
            None => false,
        }
    }

    /// Sets the selected spot's status.
    pub fn set_selected_status(&mut self, status: SpotStatus) -> bool {
        match self.canvas.selected_id() {
            Some(id) => self.canvas.set_status(id, status),
            None => false,
        }
    }

    /// Clears the whole canvas.
    pub fn clear_all(&mut self) {
        self.drag = None;
        self.canvas.clear();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
