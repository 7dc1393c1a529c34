use super::DatasetError;
use sitescore_core::model::tract::CensusTract;
use std::path::Path;

const GEOID_FIELD: &str = "GEOID";

/// reads census tract polygons from a TIGER/Line shapefile. each shape
/// record must carry a character `GEOID` attribute.
pub fn load_tracts(path: &Path) -> Result<Vec<CensusTract>, DatasetError> {
    let shapes = shapefile::read_as::<_, shapefile::Polygon, shapefile::dbase::Record>(path)
        .map_err(|e| DatasetError::ShapefileError(path.to_path_buf(), e.to_string()))?;
    shapes
        .into_iter()
        .enumerate()
        .map(|(index, (polygon, record))| {
            let geoid = match record.get(GEOID_FIELD) {
                Some(shapefile::dbase::FieldValue::Character(Some(geoid))) => {
                    Ok(geoid.trim().to_string())
                }
                Some(_) | None => Err(DatasetError::ShapefileError(
                    path.to_path_buf(),
                    format!("record {} has no character '{}' field", index, GEOID_FIELD),
                )),
            }?;
            Ok(CensusTract {
                geoid,
                geometry: polygon.into(),
            })
        })
        .collect()
}
