use serde::{Deserialize, Serialize};

/// USDA Food Access Research Atlas classification for one census tract.
/// adjusts grocery scoring: a tract the atlas does not flag as low-income
/// and low-access is considered served regardless of measured store distance.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FoodAccessRecord {
    pub geoid: String,
    pub low_income_low_access: bool,
}
