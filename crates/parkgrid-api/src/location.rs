//! Device geolocation seam.
//!
//! The map view centers on the device position when it can. Position
//! lookups fail in ordinary ways (permission denied, timeout, no source);
//! every failure degrades to a fallback center and never blocks the
//! editor.

use async_trait::async_trait;
use parkgrid_core::GeoError;
use serde::{Deserialize, Serialize};

/// A map center in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapCenter {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Abstract device location source.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// The device's current position.
    async fn current_position(&self) -> Result<MapCenter, GeoError>;
}

/// Resolves the map center from the device position, degrading to the
/// fallback on any failure.
pub async fn resolve_map_center(provider: &dyn LocationProvider, fallback: MapCenter) -> MapCenter {
    match provider.current_position().await {
        Ok(center) => center,
        Err(err) => {
            tracing::warn!(%err, "geolocation failed, using fallback map center");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(MapCenter);

    #[async_trait]
    impl LocationProvider for FixedProvider {
        async fn current_position(&self) -> Result<MapCenter, GeoError> {
            Ok(self.0)
        }
    }

    struct DeniedProvider;

    #[async_trait]
    impl LocationProvider for DeniedProvider {
        async fn current_position(&self) -> Result<MapCenter, GeoError> {
            Err(GeoError::PermissionDenied)
        }
    }

    #[tokio::test]
    async fn test_device_position_wins() {
        let provider = FixedProvider(MapCenter::new(14.6349, -90.5069));
        let fallback = MapCenter::new(0.0, 0.0);
        let center = resolve_map_center(&provider, fallback).await;
        assert_eq!(center, MapCenter::new(14.6349, -90.5069));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let fallback = MapCenter::new(14.6349, -90.5069);
        let center = resolve_map_center(&DeniedProvider, fallback).await;
        assert_eq!(center, fallback);
    }
}
