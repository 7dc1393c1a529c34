use serde::{Deserialize, Serialize};

/// one percentile bucket: indicators at or above `min_percentile` earn at
/// least `points`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PercentileBucket {
    pub min_percentile: f64,
    pub points: f64,
}

/// stable communities scoring rules. each of the five tract indicators is
/// bucket-scored independently and the awards are summed; missing indicator
/// cells are skipped rather than scored as zero-percentile.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StableCommunityRules {
    pub buckets: Vec<PercentileBucket>,
    pub max_points: f64,
}

impl Default for StableCommunityRules {
    fn default() -> Self {
        Self {
            buckets: vec![
                PercentileBucket {
                    min_percentile: 80.0,
                    points: 2.0,
                },
                PercentileBucket {
                    min_percentile: 50.0,
                    points: 1.0,
                },
            ],
            max_points: 10.0,
        }
    }
}

impl StableCommunityRules {
    /// points for one indicator percentile: the best bucket it reaches.
    pub fn indicator_points(&self, percentile: f64) -> f64 {
        self.buckets
            .iter()
            .filter(|b| percentile >= b.min_percentile)
            .map(|b| b.points)
            .fold(0.0, f64::max)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.buckets.is_empty() {
            return Err(String::from("stable communities bucket table is empty"));
        }
        if self.max_points <= 0.0 {
            return Err(format!(
                "stable communities max_points must be positive, found {}",
                self.max_points
            ));
        }
        Ok(())
    }
}
