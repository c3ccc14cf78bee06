//! The backend persistence contract.
//!
//! The console talks to an external REST service; this trait is that
//! service's shape. Implementations wrap an HTTP client in production and
//! a HashMap in tests; the rest of the system only sees the contract.

use async_trait::async_trait;
use parkgrid_core::{ApiError, Establishment, LayoutDocument, SpotStatus};

/// Abstract persistence collaborator for establishments, layouts, and
/// spot status.
///
/// Layout saves have replace semantics: the stored document is swapped
/// wholesale, never merged with prior state.
#[async_trait]
pub trait ParkingBackend: Send + Sync {
    /// Lists all establishments with their nested floors.
    async fn fetch_establishments(&self) -> Result<Vec<Establishment>, ApiError>;

    /// Creates the establishment when it has no id yet, updates it
    /// otherwise. Returns the stored record (with its assigned id).
    async fn save_establishment(
        &self,
        establishment: Establishment,
    ) -> Result<Establishment, ApiError>;

    /// Persists a floor's layout document, replacing any previous one.
    async fn save_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
        document: &LayoutDocument,
    ) -> Result<(), ApiError>;

    /// Retrieves a previously saved layout. `Ok(None)` means the floor has
    /// no layout yet, which is not an error.
    async fn load_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
    ) -> Result<Option<LayoutDocument>, ApiError>;

    /// Updates a single spot's status in place. Used by the status-change
    /// modal, outside the editor.
    async fn update_spot_status(&self, spot_id: u64, status: SpotStatus)
        -> Result<(), ApiError>;
}
