//! # Parkgrid API
//!
//! Backend contracts and the layout persistence service. The external
//! REST service appears here only as a trait
//! ([`ParkingBackend`]); [`LayoutService`] adds the client-side policy:
//! validate before sending, one save in flight at a time, drafts survive
//! failures. The geolocation seam lives here too, with its degrade-to-
//! fallback behavior.

pub mod backend;
pub mod location;
pub mod memory;
pub mod service;

pub use backend::ParkingBackend;
pub use location::{resolve_map_center, LocationProvider, MapCenter};
pub use memory::InMemoryBackend;
pub use service::LayoutService;
