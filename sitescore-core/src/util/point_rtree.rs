use super::geo_utils;
use geo::Point;
use rstar::{primitives::GeomWithData, RTree};

/// spatial index over a point dataset. entries carry an arbitrary payload,
/// typically an index into the owning record collection. queries pre-filter
/// by an over-approximated degree envelope and refine with haversine miles.
pub struct PointRTree<D> {
    tree: RTree<GeomWithData<[f64; 2], D>>,
}

impl<D> PointRTree<D> {
    pub fn new(entries: Vec<(Point<f64>, D)>) -> Self {
        let objects = entries
            .into_iter()
            .map(|(point, data)| GeomWithData::new([point.x(), point.y()], data))
            .collect();
        Self {
            tree: RTree::bulk_load(objects),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// all entries within `radius_miles` of the origin, paired with their
    /// haversine distance in miles. unordered.
    pub fn within_radius(&self, origin: &Point<f64>, radius_miles: f64) -> Vec<(&D, f64)> {
        let degrees = geo_utils::degree_radius(radius_miles, origin.y());
        self.tree
            .locate_within_distance([origin.x(), origin.y()], degrees * degrees)
            .filter_map(|entry| {
                let candidate = Point::new(entry.geom()[0], entry.geom()[1]);
                let miles = geo_utils::haversine_miles(origin, &candidate);
                if miles <= radius_miles {
                    Some((&entry.data, miles))
                } else {
                    None
                }
            })
            .collect()
    }
}
