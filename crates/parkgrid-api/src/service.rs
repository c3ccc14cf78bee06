//! Layout persistence service.
//!
//! Sits between the editor and the backend: validates before sending,
//! and holds the single-in-flight save guard. A second save requested
//! while one is pending is rejected with [`ApiError::SaveInProgress`]
//! rather than interleaved, so a half-mutated document is never sent.
//! A failed save clears the flag and leaves the draft untouched, so saves
//! borrow the document, they never consume it.

use crate::backend::ParkingBackend;
use parking_lot::Mutex;
use parkgrid_core::{ApiError, Error, Establishment, GridConfig, LayoutDocument, Result, SpotStatus};

/// Service wrapper over a [`ParkingBackend`].
pub struct LayoutService<B> {
    backend: B,
    config: GridConfig,
    saving: Mutex<bool>,
}

/// Clears the saving flag when the save settles, error paths included.
struct SaveGuard<'a> {
    flag: &'a Mutex<bool>,
}

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a Mutex<bool>) -> std::result::Result<Self, ApiError> {
        let mut saving = flag.lock();
        if *saving {
            return Err(ApiError::SaveInProgress);
        }
        *saving = true;
        Ok(Self { flag })
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        *self.flag.lock() = false;
    }
}

impl<B: ParkingBackend> LayoutService<B> {
    /// Creates a service over a backend with the given grid configuration.
    pub fn new(backend: B, config: GridConfig) -> Self {
        Self {
            backend,
            config,
            saving: Mutex::new(false),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// True while a save is in flight. Hosting views disable the save
    /// action on this flag.
    pub fn is_saving(&self) -> bool {
        *self.saving.lock()
    }

    /// Validates and persists a floor's layout.
    ///
    /// Validation failures abort before anything is sent. While a save is
    /// pending, further saves fail with `SaveInProgress`; the caller
    /// retries after the in-flight save settles. The document is only
    /// borrowed, so in-memory edits survive any failure.
    pub async fn save_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
        document: &LayoutDocument,
    ) -> Result<()> {
        document.validate(self.config.grid_size)?;
        let _guard = SaveGuard::acquire(&self.saving)?;

        tracing::info!(
            establishment_id,
            floor_id,
            elements = document.element_count(),
            "saving layout"
        );
        self.backend
            .save_layout(establishment_id, floor_id, document)
            .await
            .map_err(|err| {
                tracing::warn!(establishment_id, floor_id, %err, "layout save failed");
                Error::from(err)
            })
    }

    /// Loads a floor's persisted layout, if any.
    pub async fn load_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
    ) -> Result<Option<LayoutDocument>> {
        Ok(self.backend.load_layout(establishment_id, floor_id).await?)
    }

    /// Lists establishments with their floors.
    pub async fn fetch_establishments(&self) -> Result<Vec<Establishment>> {
        Ok(self.backend.fetch_establishments().await?)
    }

    /// Creates or updates an establishment record.
    pub async fn save_establishment(&self, establishment: Establishment) -> Result<Establishment> {
        Ok(self.backend.save_establishment(establishment).await?)
    }

    /// Updates one spot's status in place (status-change modal path).
    pub async fn update_spot_status(&self, spot_id: u64, status: SpotStatus) -> Result<()> {
        Ok(self.backend.update_spot_status(spot_id, status).await?)
    }
}
