use super::DatasetError;
use sitescore_core::model::activity::FoodAccessRecord;
use std::path::Path;

/// column layout of the USDA Food Access Research Atlas export. the atlas
/// encodes flags as 0/1 integers.
#[derive(serde::Deserialize)]
struct AtlasRow {
    #[serde(rename = "CensusTract")]
    geoid: String,
    #[serde(rename = "LILATracts_1And10")]
    low_income_low_access: u8,
}

/// reads the food-access atlas CSV into per-tract records used by the
/// grocery-scoring override.
pub fn load_food_access(path: &Path) -> Result<Vec<FoodAccessRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
    reader
        .deserialize::<AtlasRow>()
        .map(|row| {
            let row = row.map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
            Ok(FoodAccessRecord {
                geoid: row.geoid,
                low_income_low_access: row.low_income_low_access != 0,
            })
        })
        .collect()
}
