use crate::model::activity::{ActivityKind, ActivityPoint, FoodAccessRecord};
use crate::model::school::{
    AttendanceZone, BoundaryDataset, SchoolLevel, SchoolRecord, StateAverages,
};
use crate::model::tract::{CensusTract, TractIndicators};
use crate::model::transit::{TransitMode, TransitStop};
use crate::model::ReferenceBundle;
use geo::{polygon, MultiPolygon};

/// a square multipolygon centered on (cx, cy).
pub fn square(cx: f64, cy: f64, half: f64) -> MultiPolygon<f64> {
    MultiPolygon(vec![polygon![
        (x: cx - half, y: cy - half),
        (x: cx + half, y: cy - half),
        (x: cx + half, y: cy + half),
        (x: cx - half, y: cy + half),
    ]])
}

pub fn stop(latitude: f64, longitude: f64, mode: TransitMode, is_hub: bool) -> TransitStop {
    TransitStop {
        name: None,
        latitude,
        longitude,
        mode,
        is_hub,
    }
}

pub fn activity(latitude: f64, longitude: f64, category: &str, kind: ActivityKind) -> ActivityPoint {
    ActivityPoint {
        name: None,
        category: category.to_string(),
        kind,
        latitude,
        longitude,
    }
}

pub fn school_record(
    school_id: &str,
    level: SchoolLevel,
    year: u16,
    ccrpi: Option<f64>,
    beat_the_odds: bool,
) -> SchoolRecord {
    SchoolRecord {
        school_id: school_id.to_string(),
        level,
        year,
        ccrpi,
        beat_the_odds,
    }
}

pub fn zone(school_id: &str, level: Option<SchoolLevel>, geometry: MultiPolygon<f64>) -> AttendanceZone {
    AttendanceZone {
        school_id: school_id.to_string(),
        level,
        geometry,
    }
}

/// incremental builder over [`ReferenceBundle::new`] so each test names only
/// the datasets it exercises.
#[derive(Default)]
pub struct BundleFixture {
    pub transit_stops: Vec<TransitStop>,
    pub rural_union: Vec<MultiPolygon<f64>>,
    pub activities: Vec<ActivityPoint>,
    pub food_access: Vec<FoodAccessRecord>,
    pub tracts: Vec<CensusTract>,
    pub indicators: Vec<TractIndicators>,
    pub schools: Vec<SchoolRecord>,
    pub boundaries: Vec<BoundaryDataset>,
}

impl BundleFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop(mut self, s: TransitStop) -> Self {
        self.transit_stops.push(s);
        self
    }

    pub fn with_rural(mut self, geometry: MultiPolygon<f64>) -> Self {
        self.rural_union.push(geometry);
        self
    }

    pub fn with_activity(mut self, a: ActivityPoint) -> Self {
        self.activities.push(a);
        self
    }

    pub fn with_food_access(mut self, geoid: &str, low_income_low_access: bool) -> Self {
        self.food_access.push(FoodAccessRecord {
            geoid: geoid.to_string(),
            low_income_low_access,
        });
        self
    }

    pub fn with_tract(mut self, geoid: &str, geometry: MultiPolygon<f64>) -> Self {
        self.tracts.push(CensusTract {
            geoid: geoid.to_string(),
            geometry,
        });
        self
    }

    pub fn with_indicators(mut self, indicators: TractIndicators) -> Self {
        self.indicators.push(indicators);
        self
    }

    pub fn with_school(mut self, record: SchoolRecord) -> Self {
        self.schools.push(record);
        self
    }

    pub fn with_boundary(mut self, name: &str, zones: Vec<AttendanceZone>) -> Self {
        self.boundaries
            .push(BoundaryDataset::new(name.to_string(), zones).unwrap());
        self
    }

    pub fn build(self) -> ReferenceBundle {
        let rural_union = MultiPolygon(
            self.rural_union
                .into_iter()
                .flat_map(|mp| mp.0.into_iter())
                .collect(),
        );
        ReferenceBundle::new(
            self.transit_stops,
            rural_union,
            self.activities,
            self.food_access,
            self.tracts,
            self.indicators,
            self.schools,
            self.boundaries,
            StateAverages::default(),
        )
        .unwrap()
    }
}
