use serde::{Deserialize, Serialize};

/// names of the five stable-communities indicators, in reporting order.
pub const INDICATOR_NAMES: [&str; 5] = [
    "above_poverty",
    "median_income",
    "transit_access",
    "jobs_proximity",
    "environmental_health",
];

/// tract-level indicator percentiles (0-100, metro-relative) from the
/// processed stable-communities dataset. cells are legitimately missing for
/// some tracts; a missing cell is neutral, never zeroing the tract's score.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TractIndicators {
    pub geoid: String,
    pub above_poverty: Option<f64>,
    pub median_income: Option<f64>,
    pub transit_access: Option<f64>,
    pub jobs_proximity: Option<f64>,
    pub environmental_health: Option<f64>,
}

impl TractIndicators {
    /// indicator values in [`INDICATOR_NAMES`] order.
    pub fn values(&self) -> [Option<f64>; 5] {
        [
            self.above_poverty,
            self.median_income,
            self.transit_access,
            self.jobs_proximity,
            self.environmental_health,
        ]
    }
}
