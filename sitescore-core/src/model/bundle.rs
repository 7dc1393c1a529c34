use super::activity::{ActivityPoint, FoodAccessRecord};
use super::school::{BoundaryDataset, SchoolRecord, StateAverages};
use super::tract::{CensusTract, TractIndicators};
use super::transit::TransitStop;
use crate::score::ScoreError;
use crate::util::point_rtree::PointRTree;
use crate::util::polygonal_rtree::PolygonalRTree;
use geo::{Intersects, MultiPolygon, Point};
use itertools::Itertools;
use std::collections::HashMap;

/// all reference datasets assembled once at load time, with their spatial
/// indexes. calculators borrow the bundle read-only, so concurrent scoring
/// calls are safe without locking; nothing here mutates after construction.
pub struct ReferenceBundle {
    transit_stops: Vec<TransitStop>,
    transit_index: PointRTree<usize>,
    rural_union: MultiPolygon<f64>,
    activities: Vec<ActivityPoint>,
    activity_index: PointRTree<usize>,
    food_access: HashMap<String, FoodAccessRecord>,
    tracts: PolygonalRTree<String>,
    indicators: HashMap<String, TractIndicators>,
    schools: HashMap<String, Vec<SchoolRecord>>,
    boundaries: Vec<BoundaryDataset>,
    state_averages: StateAverages,
}

impl ReferenceBundle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transit_stops: Vec<TransitStop>,
        rural_union: MultiPolygon<f64>,
        activities: Vec<ActivityPoint>,
        food_access: Vec<FoodAccessRecord>,
        tracts: Vec<CensusTract>,
        indicators: Vec<TractIndicators>,
        schools: Vec<SchoolRecord>,
        boundaries: Vec<BoundaryDataset>,
        state_averages: StateAverages,
    ) -> Result<Self, ScoreError> {
        let transit_index = PointRTree::new(
            transit_stops
                .iter()
                .enumerate()
                .map(|(i, s)| (s.point(), i))
                .collect(),
        );
        let activity_index = PointRTree::new(
            activities
                .iter()
                .enumerate()
                .map(|(i, a)| (a.point(), i))
                .collect(),
        );
        let tract_entries = tracts
            .into_iter()
            .map(|t| (t.geometry, t.geoid))
            .collect_vec();
        let tracts = PolygonalRTree::new(tract_entries).map_err(ScoreError::SpatialIndexError)?;
        let food_access = food_access
            .into_iter()
            .map(|r| (r.geoid.clone(), r))
            .collect::<HashMap<_, _>>();
        let indicators = indicators
            .into_iter()
            .map(|r| (r.geoid.clone(), r))
            .collect::<HashMap<_, _>>();
        let schools = schools
            .into_iter()
            .map(|r| (r.school_id.clone(), r))
            .into_group_map();

        Ok(Self {
            transit_stops,
            transit_index,
            rural_union,
            activities,
            activity_index,
            food_access,
            tracts,
            indicators,
            schools,
            boundaries,
            state_averages,
        })
    }

    /// nearest transit stop to the origin within `radius_miles` that passes
    /// the predicate, with its distance in miles.
    pub fn nearest_transit_stop<F>(
        &self,
        origin: &Point<f64>,
        radius_miles: f64,
        predicate: F,
    ) -> Option<(&TransitStop, f64)>
    where
        F: Fn(&TransitStop) -> bool,
    {
        self.transit_index
            .within_radius(origin, radius_miles)
            .into_iter()
            .filter_map(|(index, miles)| {
                let stop = self.transit_stops.get(*index)?;
                if predicate(stop) {
                    Some((stop, miles))
                } else {
                    None
                }
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// all activity points within `radius_miles` of the origin, with their
    /// distances in miles.
    pub fn activities_within(
        &self,
        origin: &Point<f64>,
        radius_miles: f64,
    ) -> Vec<(&ActivityPoint, f64)> {
        self.activity_index
            .within_radius(origin, radius_miles)
            .into_iter()
            .filter_map(|(index, miles)| self.activities.get(*index).map(|a| (a, miles)))
            .collect()
    }

    /// whether the point falls inside the USDA-rural union geometry.
    pub fn is_rural(&self, point: &Point<f64>) -> bool {
        self.rural_union.intersects(point)
    }

    /// GEOID of the census tract containing the point. tract polygons are
    /// non-overlapping; boundary touches resolve to the lexicographically
    /// smallest GEOID for determinism.
    pub fn containing_tract(&self, point: &Point<f64>) -> Option<&str> {
        self.tracts
            .containing(point)
            .map(|node| node.data.as_str())
            .min()
    }

    pub fn food_access(&self, geoid: &str) -> Option<&FoodAccessRecord> {
        self.food_access.get(geoid)
    }

    pub fn indicators(&self, geoid: &str) -> Option<&TractIndicators> {
        self.indicators.get(geoid)
    }

    pub fn school_records(&self, school_id: &str) -> Option<&[SchoolRecord]> {
        self.schools.get(school_id).map(|v| v.as_slice())
    }

    /// boundary datasets in their configured priority order.
    pub fn boundaries(&self) -> &[BoundaryDataset] {
        &self.boundaries
    }

    pub fn state_averages(&self) -> &StateAverages {
        &self.state_averages
    }

    /// tract polygons with their GEOIDs, for tract-level layer building.
    pub fn tract_geometries(&self) -> impl Iterator<Item = (&str, &MultiPolygon<f64>)> {
        self.tracts
            .iter()
            .map(|node| (node.data.as_str(), &node.geometry))
    }
}
