use sitescore_core::score::ScoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unable to read file {}: {}", .0.display(), .1)]
    FileReadError(PathBuf, String),
    #[error("failure parsing manifest {}: {}", .0.display(), .1)]
    ManifestError(PathBuf, String),
    #[error("failure reading {} as CSV: {}", .0.display(), .1)]
    CsvError(PathBuf, String),
    #[error("failure reading {} as GeoJSON: {}", .0.display(), .1)]
    GeoJsonError(PathBuf, String),
    #[error("failure reading {} as shapefile: {}", .0.display(), .1)]
    ShapefileError(PathBuf, String),
    #[error("required dataset '{0}' is empty")]
    EmptyDataset(String),
    #[error("failure assembling reference bundle: {source}")]
    BundleError {
        #[from]
        source: ScoreError,
    },
    #[error("{0}")]
    InternalError(String),
}
