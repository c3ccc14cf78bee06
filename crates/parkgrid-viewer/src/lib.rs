//! # Parkgrid Viewer
//!
//! Read-only projection of a persisted floor layout. Given a
//! [`parkgrid_core::FloorLayout`], computes each element's visual bounding
//! box and a style keyed by `(kind, status)`. The viewer never mutates its
//! input and can be re-projected from the same document any number of
//! times; it is a leaf consumer of the editor's output and never feeds
//! back into the model.

pub mod style;
pub mod view;

pub use style::{style_for, BorderStyle, ElementStyle, VisualShape};
pub use view::{ElementVisual, LayoutView};
