use super::geojson_ops::{feature_multipolygon, read_feature_collection, string_property};
use super::manifest::BoundaryEntry;
use super::DatasetError;
use sitescore_core::model::school::{AttendanceZone, BoundaryDataset, SchoolRecord};
use std::path::Path;

/// reads the school performance CSV. expected columns: `school_id`, `level`
/// (elementary | middle | high), `year`, `ccrpi` (may be empty),
/// optional `beat_the_odds`.
pub fn load_school_records(path: &Path) -> Result<Vec<SchoolRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
    reader
        .deserialize::<SchoolRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))
}

/// reads one attendance-zone boundary GeoJSON into an indexed dataset.
/// features without a school identifier or polygonal geometry are skipped
/// with a warning; the zone level is the entry's pinned level.
pub fn load_boundary_dataset(entry: &BoundaryEntry) -> Result<BoundaryDataset, DatasetError> {
    let feature_collection = read_feature_collection(&entry.path)?;
    let zones: Vec<AttendanceZone> = feature_collection
        .features
        .iter()
        .filter_map(|feature| {
            let school_id = match string_property(feature, &entry.school_id_property) {
                Some(school_id) => school_id,
                None => {
                    log::warn!(
                        "skipping feature in '{}' without a '{}' property",
                        entry.name,
                        entry.school_id_property
                    );
                    return None;
                }
            };
            let geometry = feature_multipolygon(feature)?;
            Some(AttendanceZone {
                school_id,
                level: entry.level,
                geometry,
            })
        })
        .collect();
    if zones.is_empty() {
        return Err(DatasetError::EmptyDataset(entry.name.clone()));
    }
    BoundaryDataset::new(entry.name.clone(), zones).map_err(DatasetError::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitescore_core::model::school::SchoolLevel;
    use std::io::Write;

    const BOUNDARIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-84.5, 33.5], [-84.0, 33.5], [-84.0, 34.0], [-84.5, 34.0], [-84.5, 33.5]]]
                },
                "properties": { "school_id": "hope_elem" }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": { "school_id": "broken_zone" }
            }
        ]
    }"#;

    #[test]
    fn test_load_school_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "school_id,level,year,ccrpi,beat_the_odds").unwrap();
        writeln!(file, "hope_elem,elementary,2019,85.2,false").unwrap();
        writeln!(file, "hope_elem,elementary,2018,,true").unwrap();
        let records = load_school_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ccrpi, Some(85.2));
        assert_eq!(records[1].ccrpi, None);
        assert!(records[1].beat_the_odds);
    }

    #[test]
    fn test_load_boundary_dataset_skips_broken_features() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", BOUNDARIES).unwrap();
        let entry = BoundaryEntry {
            name: String::from("elementary districts"),
            path: file.path().to_path_buf(),
            level: Some(SchoolLevel::Elementary),
            school_id_property: String::from("school_id"),
        };
        let dataset = load_boundary_dataset(&entry).unwrap();
        assert_eq!(dataset.len(), 1);
        let info = dataset.find(&geo::Point::new(-84.25, 33.75)).unwrap();
        assert_eq!(info.school_id, "hope_elem");
        assert_eq!(info.level, Some(SchoolLevel::Elementary));
    }

    #[test]
    fn test_all_features_broken_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "FeatureCollection", "features": [{{"type": "Feature", "geometry": null, "properties": {{}}}}]}}"#
        )
        .unwrap();
        let entry = BoundaryEntry {
            name: String::from("broken"),
            path: file.path().to_path_buf(),
            level: None,
            school_id_property: String::from("school_id"),
        };
        assert!(matches!(
            load_boundary_dataset(&entry),
            Err(DatasetError::EmptyDataset(_))
        ));
    }
}
