use crate::util::polygonal_rtree::PolygonalRTree;
use geo::{MultiPolygon, Point};

/// payload attached to each attendance-zone geometry. the ordinal preserves
/// the feature order of the source file so that containment ties within one
/// dataset resolve deterministically.
#[derive(Clone, Debug)]
pub struct ZoneInfo {
    pub school_id: String,
    pub level: Option<super::SchoolLevel>,
    pub ordinal: usize,
}

/// one attendance-zone polygon, as read from a district boundary file.
#[derive(Clone, Debug)]
pub struct AttendanceZone {
    pub school_id: String,
    pub level: Option<super::SchoolLevel>,
    pub geometry: MultiPolygon<f64>,
}

/// one district boundary file's zones behind a spatial index. datasets are
/// consulted in load order; within a dataset the lowest-ordinal containing
/// zone wins.
pub struct BoundaryDataset {
    pub name: String,
    index: PolygonalRTree<ZoneInfo>,
}

impl BoundaryDataset {
    pub fn new(name: String, zones: Vec<AttendanceZone>) -> Result<Self, String> {
        let entries = zones
            .into_iter()
            .enumerate()
            .map(|(ordinal, zone)| {
                (
                    zone.geometry,
                    ZoneInfo {
                        school_id: zone.school_id,
                        level: zone.level,
                        ordinal,
                    },
                )
            })
            .collect();
        let index = PolygonalRTree::new(entries)
            .map_err(|e| format!("failure indexing boundary dataset '{}': {}", name, e))?;
        Ok(Self { name, index })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// the attendance zone containing the point, if any.
    pub fn find(&self, point: &Point<f64>) -> Option<&ZoneInfo> {
        self.index
            .containing(point)
            .map(|node| &node.data)
            .min_by_key(|info| info.ordinal)
    }
}
