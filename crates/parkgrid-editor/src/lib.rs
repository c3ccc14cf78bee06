//! # Parkgrid Editor
//!
//! Interactive floor layout editor for Parkgrid: place, drag, reorient,
//! relabel, and delete parking-spot elements on a grid, and derive
//! human-readable spot numbers ("A1", "B3") from geometric position.
//!
//! ## Architecture
//!
//! The editor is two cooperating halves:
//!
//! ```text
//! EditorSession (interaction state machine)
//!   ├── Tool (select / place)
//!   ├── Drag state (selected id + grab offset, reset on pointer-up)
//!   └── LayoutCanvas (model)
//!         ├── ElementStore (insertion-ordered elements, monotonic ids)
//!         └── Label derivation (row bands -> "A1", "B3")
//! ```
//!
//! Pointer events flow into the session, the session mutates the canvas,
//! and the hosting view re-renders. Exporting partitions the elements into
//! spots and fixtures ([`parkgrid_core::LayoutDocument`]); the read path
//! lives in `parkgrid-viewer`.

pub mod canvas;
pub mod element;
pub mod element_store;
pub mod labels;
pub mod session;
pub mod validation;

pub use canvas::LayoutCanvas;
pub use element::{default_size, LayoutElement};
pub use element_store::ElementStore;
pub use labels::{row_index, row_letter, spot_label};
pub use session::{EditorSession, PointerOutcome, Tool};
pub use validation::validate_canvas;
