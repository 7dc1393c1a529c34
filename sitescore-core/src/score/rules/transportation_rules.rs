use super::DistanceSchedule;
use serde::{Deserialize, Serialize};

/// community transportation options scoring rules. rural sites score on the
/// fixed-route schedule only; non-rural sites score on the transit-oriented
/// development schedule against qualifying hubs, falling back to the
/// fixed-route schedule when no hub is in range.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TransportationRules {
    pub tod: DistanceSchedule,
    pub fixed_route: DistanceSchedule,
    pub max_points: f64,
}

impl Default for TransportationRules {
    fn default() -> Self {
        Self {
            tod: DistanceSchedule::new(vec![(0.25, 6.0), (0.5, 5.0), (1.0, 4.0)]),
            fixed_route: DistanceSchedule::new(vec![(0.25, 3.0), (0.5, 2.0), (1.0, 1.0)]),
            max_points: 6.0,
        }
    }
}

impl TransportationRules {
    pub fn validate(&self) -> Result<(), String> {
        if self.tod.is_empty() {
            return Err(String::from("transportation TOD schedule is empty"));
        }
        if self.fixed_route.is_empty() {
            return Err(String::from("transportation fixed-route schedule is empty"));
        }
        if self.max_points <= 0.0 {
            return Err(format!(
                "transportation max_points must be positive, found {}",
                self.max_points
            ));
        }
        Ok(())
    }
}
