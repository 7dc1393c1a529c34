use super::TransitMode;
use geo::Point;
use serde::{Deserialize, Serialize};

/// one stop from the statewide transit locations dataset. immutable
/// reference data, loaded once per process.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransitStop {
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "stop_type")]
    pub mode: TransitMode,
    #[serde(default)]
    pub is_hub: bool,
}

impl TransitStop {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// whether this stop qualifies for the transit-oriented development tier:
    /// rail hubs always do, bus rapid transit only when flagged as a hub.
    pub fn is_qualifying_hub(&self) -> bool {
        match self.mode {
            TransitMode::RailHub => true,
            TransitMode::BusRapidTransit => self.is_hub,
            TransitMode::FixedRoute => false,
        }
    }
}
