use super::geojson_ops::{feature_multipolygon, read_feature_collection};
use super::DatasetError;
use geo::MultiPolygon;
use std::path::Path;

/// reads the USDA-rural area GeoJSON and dissolves its polygons into one
/// union geometry. the union makes the rural test a single containment
/// check regardless of how many source tracts overlap.
pub fn load_rural_union(path: &Path) -> Result<MultiPolygon<f64>, DatasetError> {
    let feature_collection = read_feature_collection(path)?;
    let polygons: Vec<MultiPolygon<f64>> = feature_collection
        .features
        .iter()
        .filter_map(feature_multipolygon)
        .collect();
    if polygons.is_empty() {
        return Err(DatasetError::GeoJsonError(
            path.to_path_buf(),
            String::from("no polygonal features found in rural area file"),
        ));
    }
    Ok(geo::unary_union(&polygons))
}
