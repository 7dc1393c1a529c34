use serde::{Deserialize, Serialize};

/// service type of a transit stop, as tagged in the statewide transit
/// locations dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransitMode {
    RailHub,
    BusRapidTransit,
    FixedRoute,
}

impl std::fmt::Display for TransitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitMode::RailHub => write!(f, "rail_hub"),
            TransitMode::BusRapidTransit => write!(f, "bus_rapid_transit"),
            TransitMode::FixedRoute => write!(f, "fixed_route"),
        }
    }
}
