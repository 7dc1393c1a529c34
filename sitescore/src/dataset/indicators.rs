use super::DatasetError;
use sitescore_core::model::tract::TractIndicators;
use std::path::Path;

/// reads the processed stable-communities indicator CSV. empty cells
/// deserialize as missing values, which score as neutral.
pub fn load_indicators(path: &Path) -> Result<Vec<TractIndicators>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
    reader
        .deserialize::<TractIndicators>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))
}
