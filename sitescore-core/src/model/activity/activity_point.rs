use super::ActivityKind;
use geo::Point;
use serde::{Deserialize, Serialize};

/// one activity location from the reconciled desirable/undesirable pool.
/// the category string keys into the scoring rules table, which owns the
/// point value and qualifying radius; the record itself is unscored data.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ActivityPoint {
    pub name: Option<String>,
    pub category: String,
    pub kind: ActivityKind,
    pub latitude: f64,
    pub longitude: f64,
}

impl ActivityPoint {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
