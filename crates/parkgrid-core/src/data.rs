//! Shared data models: establishments, floors, element kinds, spot status.
//!
//! Wire names match the external backend byte for byte: element type tags
//! are snake_case and the status strings are the Spanish display values
//! (`"Disponible"`, `"Fuera de Servicio"`, ...).

use crate::document::FloorLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of one parking spot.
///
/// Any status is reachable from any status; there are no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotStatus {
    #[serde(rename = "Disponible")]
    Disponible,
    #[serde(rename = "Ocupado")]
    Ocupado,
    #[serde(rename = "Reservado")]
    Reservado,
    #[serde(rename = "Fuera de Servicio")]
    FueraDeServicio,
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disponible => write!(f, "Disponible"),
            Self::Ocupado => write!(f, "Ocupado"),
            Self::Reservado => write!(f, "Reservado"),
            Self::FueraDeServicio => write!(f, "Fuera de Servicio"),
        }
    }
}

/// Kind of a placed layout element.
///
/// A closed set: unknown tags are deserialization errors, not a fallback.
/// Only `ParkingSpot` carries a status, a derived number, and an
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    ParkingSpot,
    Wall,
    Pillar,
    Stairs,
    Elevator,
}

impl ElementKind {
    /// True for the only kind that carries spot data.
    pub fn is_spot(&self) -> bool {
        matches!(self, Self::ParkingSpot)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParkingSpot => write!(f, "parking_spot"),
            Self::Wall => write!(f, "wall"),
            Self::Pillar => write!(f, "pillar"),
            Self::Stairs => write!(f, "stairs"),
            Self::Elevator => write!(f, "elevator"),
        }
    }
}

/// Orientation of a parking spot. Meaningful only for spots; toggling it
/// swaps the spot's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Status of a whole establishment. The backend reuses the spot status
/// strings for establishments.
pub type EstablishmentStatus = SpotStatus;

/// One parking establishment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    /// Backend-assigned id; `None` for an establishment not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: EstablishmentStatus,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

/// One level of an establishment. The editor only ever reads and writes
/// the floor's `layout`; floor creation and removal belong to the
/// maintenance screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: i64,
    /// Display label, e.g. "1" or "PB".
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<FloorLayout>,
}

/// Aggregate spot counts for one floor, used by the stats panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancySummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub out_of_service: usize,
}

impl OccupancySummary {
    /// Tallies an iterator of spot statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = SpotStatus>,
    {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match status {
                SpotStatus::Disponible => summary.available += 1,
                SpotStatus::Ocupado => summary.occupied += 1,
                SpotStatus::Reservado => summary.reserved += 1,
                SpotStatus::FueraDeServicio => summary.out_of_service += 1,
            }
        }
        summary
    }

    /// Occupied percentage rounded to the nearest integer; 0 for an empty
    /// floor.
    pub fn occupancy_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.occupied as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&SpotStatus::Disponible).unwrap(),
            "\"Disponible\""
        );
        assert_eq!(
            serde_json::to_string(&SpotStatus::FueraDeServicio).unwrap(),
            "\"Fuera de Servicio\""
        );
        let status: SpotStatus = serde_json::from_str("\"Ocupado\"").unwrap();
        assert_eq!(status, SpotStatus::Ocupado);
    }

    #[test]
    fn test_element_kind_tags_are_closed() {
        assert_eq!(
            serde_json::to_string(&ElementKind::ParkingSpot).unwrap(),
            "\"parking_spot\""
        );
        assert!(serde_json::from_str::<ElementKind>("\"ramp\"").is_err());
    }

    #[test]
    fn test_orientation_toggle_is_involutive() {
        assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
        assert_eq!(
            Orientation::Horizontal.toggled().toggled(),
            Orientation::Horizontal
        );
    }

    #[test]
    fn test_occupancy_rate() {
        let empty = OccupancySummary::from_statuses([]);
        assert_eq!(empty.occupancy_rate(), 0);

        let half = OccupancySummary::from_statuses([SpotStatus::Ocupado, SpotStatus::Disponible]);
        assert_eq!(half.total, 2);
        assert_eq!(half.occupancy_rate(), 50);

        let third = OccupancySummary::from_statuses([
            SpotStatus::Ocupado,
            SpotStatus::Disponible,
            SpotStatus::Reservado,
        ]);
        assert_eq!(third.occupancy_rate(), 33);
    }

    #[test]
    fn test_establishment_round_trip() {
        let est = Establishment {
            id: Some(3),
            name: "Parqueo Central".to_string(),
            address: "Av. Principal 123".to_string(),
            latitude: 14.634915,
            longitude: -90.506882,
            status: SpotStatus::Disponible,
            floors: vec![Floor {
                id: 7,
                number: "1".to_string(),
                layout: None,
            }],
        };
        let json = serde_json::to_string(&est).unwrap();
        let back: Establishment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, est);
    }
}
