//! HashMap-backed backend for tests and the CLI.

use crate::backend::ParkingBackend;
use async_trait::async_trait;
use parking_lot::Mutex;
use parkgrid_core::{ApiError, Establishment, LayoutDocument, SpotStatus};
use std::collections::HashMap;

/// In-memory [`ParkingBackend`] with the same observable semantics as the
/// REST service: replace-on-save layouts, backend-assigned establishment
/// ids, not-found for unknown records.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    establishments: Mutex<Vec<Establishment>>,
    layouts: Mutex<HashMap<(i64, i64), LayoutDocument>>,
    next_id: Mutex<i64>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            establishments: Mutex::new(Vec::new()),
            layouts: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Number of stored layouts, for test assertions.
    pub fn layout_count(&self) -> usize {
        self.layouts.lock().len()
    }
}

#[async_trait]
impl ParkingBackend for InMemoryBackend {
    async fn fetch_establishments(&self) -> Result<Vec<Establishment>, ApiError> {
        Ok(self.establishments.lock().clone())
    }

    async fn save_establishment(
        &self,
        mut establishment: Establishment,
    ) -> Result<Establishment, ApiError> {
        let mut establishments = self.establishments.lock();
        match establishment.id {
            Some(id) => {
                let existing = establishments
                    .iter_mut()
                    .find(|e| e.id == Some(id))
                    .ok_or_else(|| ApiError::NotFound {
                        resource: format!("establishment {id}"),
                    })?;
                *existing = establishment.clone();
                Ok(establishment)
            }
            None => {
                let mut next_id = self.next_id.lock();
                establishment.id = Some(*next_id);
                *next_id += 1;
                establishments.push(establishment.clone());
                Ok(establishment)
            }
        }
    }

    async fn save_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
        document: &LayoutDocument,
    ) -> Result<(), ApiError> {
        self.layouts
            .lock()
            .insert((establishment_id, floor_id), document.clone());
        Ok(())
    }

    async fn load_layout(
        &self,
        establishment_id: i64,
        floor_id: i64,
    ) -> Result<Option<LayoutDocument>, ApiError> {
        Ok(self
            .layouts
            .lock()
            .get(&(establishment_id, floor_id))
            .cloned())
    }

    async fn update_spot_status(
        &self,
        spot_id: u64,
        status: SpotStatus,
    ) -> Result<(), ApiError> {
        let mut layouts = self.layouts.lock();
        for document in layouts.values_mut() {
            if let Some(spot) = document.spots.iter_mut().find(|s| s.id == spot_id) {
                spot.status = status;
                return Ok(());
            }
        }
        Err(ApiError::NotFound {
            resource: format!("spot {spot_id}"),
        })
    }
}
