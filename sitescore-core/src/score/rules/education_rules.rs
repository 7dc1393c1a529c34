use serde::{Deserialize, Serialize};

/// quality education areas scoring rules. CCRPI relative to the state
/// average earns tiered points, Beat-the-Odds recognition adds a bonus, and
/// the sum clips to `max_points`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EducationRules {
    pub above_average_points: f64,
    pub near_average_margin: f64,
    pub near_average_points: f64,
    pub beat_the_odds_bonus: f64,
    pub max_points: f64,
}

impl Default for EducationRules {
    fn default() -> Self {
        Self {
            above_average_points: 2.0,
            near_average_margin: 5.0,
            near_average_points: 1.0,
            beat_the_odds_bonus: 1.0,
            max_points: 3.0,
        }
    }
}

impl EducationRules {
    /// tier points for a CCRPI score against the applicable state average.
    pub fn ccrpi_points(&self, ccrpi: f64, state_average: f64) -> f64 {
        let difference = ccrpi - state_average;
        if difference >= 0.0 {
            self.above_average_points
        } else if difference >= -self.near_average_margin {
            self.near_average_points
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_points <= 0.0 {
            return Err(format!(
                "education max_points must be positive, found {}",
                self.max_points
            ));
        }
        if self.near_average_margin < 0.0 {
            return Err(format!(
                "education near_average_margin must be non-negative, found {}",
                self.near_average_margin
            ));
        }
        Ok(())
    }
}
