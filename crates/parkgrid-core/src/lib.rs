//! # Parkgrid Core
//!
//! Core types, contracts, and utilities for Parkgrid.
//! Provides the fundamental abstractions shared by the layout editor,
//! the read-only viewer, and the backend service layer:
//!
//! - Data models (establishments, floors, spot status, element kinds)
//! - The persisted layout document contracts
//! - Grid geometry (snapping, cell conversion)
//! - Configuration with validated defaults
//! - The unified error taxonomy

pub mod config;
pub mod constants;
pub mod data;
pub mod document;
pub mod error;
pub mod geometry;

pub use config::GridConfig;
pub use data::{
    Establishment, EstablishmentStatus, Floor, ElementKind, OccupancySummary, Orientation,
    SpotStatus,
};
pub use document::{FixtureRecord, FloorLayout, LayoutDocument, SpotData, SpotRecord, ViewElement};
pub use error::{ApiError, Error, GeoError, LayoutError, Result};
pub use geometry::{grid_cell, snap_to_grid, Point, Rect};
