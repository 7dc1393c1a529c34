use super::{ActivityRules, EducationRules, StableCommunityRules, TransportationRules};
use crate::score::ScoreError;
use serde::{Deserialize, Serialize};

/// the full scoring rule set for the four location criteria. rules are data:
/// defaults match the published QAP schedules, and any table can be
/// overridden from a rules file without touching calculator code.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ScoringRules {
    pub transportation: TransportationRules,
    pub activities: ActivityRules,
    pub education: EducationRules,
    pub stable_communities: StableCommunityRules,
}

impl ScoringRules {
    pub fn validate(&self) -> Result<(), ScoreError> {
        self.transportation
            .validate()
            .map_err(ScoreError::InvalidRules)?;
        self.activities
            .validate()
            .map_err(ScoreError::InvalidRules)?;
        self.education
            .validate()
            .map_err(ScoreError::InvalidRules)?;
        self.stable_communities
            .validate()
            .map_err(ScoreError::InvalidRules)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_validate() {
        assert!(ScoringRules::default().validate().is_ok());
    }
}
