use super::SchoolLevel;
use serde::{Deserialize, Serialize};

/// one (school, year) row from the school performance dataset. CCRPI values
/// may be missing for years a school was not rated.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SchoolRecord {
    pub school_id: String,
    pub level: SchoolLevel,
    pub year: u16,
    pub ccrpi: Option<f64>,
    #[serde(default)]
    pub beat_the_odds: bool,
}
