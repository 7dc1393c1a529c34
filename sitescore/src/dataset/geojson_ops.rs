use super::DatasetError;
use geojson::GeoJson;
use std::path::Path;
use std::str::FromStr;

/// helper to read a FeatureCollection from a file
pub fn read_feature_collection(path: &Path) -> Result<geojson::FeatureCollection, DatasetError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DatasetError::FileReadError(path.to_path_buf(), e.to_string()))?;
    let dataset = GeoJson::from_str(&contents)
        .map_err(|e| DatasetError::GeoJsonError(path.to_path_buf(), e.to_string()))?;
    match dataset {
        GeoJson::Geometry(_) => Err(DatasetError::GeoJsonError(
            path.to_path_buf(),
            String::from("expected a FeatureCollection but found a single 'Geometry'"),
        )),
        GeoJson::Feature(_) => Err(DatasetError::GeoJsonError(
            path.to_path_buf(),
            String::from("expected a FeatureCollection but found a single 'Feature'"),
        )),
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
    }
}

/// unpacks a feature's geometry as a MultiPolygon. single polygons are
/// promoted; features with missing, malformed, or non-polygonal geometries
/// yield None so callers can filter them with a warning rather than fail
/// a whole file.
pub fn feature_multipolygon(feature: &geojson::Feature) -> Option<geo::MultiPolygon<f64>> {
    let geom = feature.geometry.as_ref()?;
    let geometry: geo::Geometry<f64> = match geom.clone().try_into() {
        Ok(g) => g,
        Err(e) => {
            log::warn!("skipping feature with undecodable geometry: {}", e);
            return None;
        }
    };
    match geometry {
        geo::Geometry::Polygon(p) => Some(geo::MultiPolygon(vec![p])),
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        _ => {
            log::warn!("skipping feature with non-polygonal geometry");
            None
        }
    }
}

/// reads a feature property as a string, accepting JSON string or numeric
/// encodings (district files disagree on identifier types).
pub fn string_property(feature: &geojson::Feature, key: &str) -> Option<String> {
    match feature.properties.as_ref()?.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                },
                "properties": { "school_id": "hope_elem", "district": 7 }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [0.5, 0.5]
                },
                "properties": {}
            }
        ]
    }"#;

    #[test]
    fn test_read_feature_collection() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", COLLECTION).unwrap();
        let fc = read_feature_collection(file.path()).unwrap();
        assert_eq!(fc.features.len(), 2);
    }

    #[test]
    fn test_non_collection_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "Point", "coordinates": [0.0, 0.0]}}"#).unwrap();
        assert!(read_feature_collection(file.path()).is_err());
    }

    #[test]
    fn test_feature_multipolygon_filters_points() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", COLLECTION).unwrap();
        let fc = read_feature_collection(file.path()).unwrap();
        assert!(feature_multipolygon(&fc.features[0]).is_some());
        assert!(feature_multipolygon(&fc.features[1]).is_none());
    }

    #[test]
    fn test_string_property_accepts_numbers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", COLLECTION).unwrap();
        let fc = read_feature_collection(file.path()).unwrap();
        assert_eq!(
            string_property(&fc.features[0], "school_id"),
            Some(String::from("hope_elem"))
        );
        assert_eq!(
            string_property(&fc.features[0], "district"),
            Some(String::from("7"))
        );
        assert_eq!(string_property(&fc.features[0], "missing"), None);
    }
}
