use geo::{BoundingRect, Distance, Haversine, MultiPolygon, Point};
use rstar::AABB;

pub const METERS_PER_MILE: f64 = 1609.344;

/// approximate length of one degree of latitude in miles, used only to
/// over-approximate index search envelopes before refining with haversine.
pub const MILES_PER_DEGREE_LAT: f64 = 69.0;

/// great-circle distance between two WGS84 points, in miles.
pub fn haversine_miles(origin: &Point<f64>, destination: &Point<f64>) -> f64 {
    Haversine.distance(*origin, *destination) / METERS_PER_MILE
}

/// conservative radius in decimal degrees covering `miles` at the given
/// latitude. longitude degrees shrink toward the poles, so the radius is
/// padded by the inverse cosine of the latitude (floored away from the
/// singularity). results are only used to pre-filter r-tree candidates.
pub fn degree_radius(miles: f64, latitude: f64) -> f64 {
    let lat_scale = latitude.to_radians().cos().abs().max(0.1);
    (miles / MILES_PER_DEGREE_LAT) / lat_scale
}

/// creates an envelope for a multipolygon from its bounding rectangle.
/// empty geometries have no bounds, so the result may be None.
pub fn multipolygon_envelope(geometry: &MultiPolygon<f64>) -> Option<AABB<[f64; 2]>> {
    let rect = geometry.bounding_rect()?;
    Some(AABB::from_corners(
        [rect.min().x, rect.min().y],
        [rect.max().x, rect.max().y],
    ))
}
