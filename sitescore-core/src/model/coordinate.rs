use geo::Point;
use serde::{Deserialize, Serialize};

/// a candidate site location in WGS84 coordinates. construction performs no
/// validation; the aggregator validates before any calculator runs, since
/// points outside the covered region are legal inputs that score zero.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// the site as an (x, y) = (longitude, latitude) geometry.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl std::fmt::Display for SiteCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
