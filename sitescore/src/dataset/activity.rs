use super::DatasetError;
use sitescore_core::model::activity::{ActivityKind, ActivityPoint};
use std::path::Path;

/// one row of a places CSV: the kind (desirable vs undesirable) comes from
/// which file the row lives in, not the row itself.
#[derive(serde::Deserialize)]
struct ActivityRow {
    #[serde(default)]
    name: Option<String>,
    category: String,
    latitude: f64,
    longitude: f64,
}

/// reads the desirable and undesirable activity CSVs and reconciles them
/// into a single pool. categories are plain strings keyed into the scoring
/// rules table at score time.
pub fn load_activities(
    desirable_path: &Path,
    undesirable_path: &Path,
) -> Result<Vec<ActivityPoint>, DatasetError> {
    let mut pool = read_rows(desirable_path, ActivityKind::Desirable)?;
    pool.extend(read_rows(undesirable_path, ActivityKind::Undesirable)?);
    Ok(pool)
}

fn read_rows(path: &Path, kind: ActivityKind) -> Result<Vec<ActivityPoint>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
    reader
        .deserialize::<ActivityRow>()
        .map(|row| {
            let row = row.map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
            Ok(ActivityPoint {
                name: row.name,
                category: row.category,
                kind,
                latitude: row.latitude,
                longitude: row.longitude,
            })
        })
        .collect()
}
