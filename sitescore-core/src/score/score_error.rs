use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid site coordinate ({0}, {1}): {2}")]
    InvalidCoordinate(f64, f64, String),
    #[error("scoring rules are invalid: {0}")]
    InvalidRules(String),
    #[error("failure building spatial index: {0}")]
    SpatialIndexError(String),
}
