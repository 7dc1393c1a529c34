pub mod activities;
pub mod aggregator;
pub mod education;
pub mod rules;
mod score_error;
pub mod stable_communities;
pub mod transportation;

pub use activities::DesirableUndesirableActivities;
pub use aggregator::{calculate_scores, validate_coordinate, ScoreBreakdown};
pub use education::QualityEducation;
pub use score_error::ScoreError;
pub use stable_communities::StableCommunities;
pub use transportation::CommunityTransportationOptions;

#[cfg(test)]
pub(crate) mod test_fixtures;
