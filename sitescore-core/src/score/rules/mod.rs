mod activity_rules;
mod distance_schedule;
mod education_rules;
mod scoring_rules;
mod stable_rules;
mod transportation_rules;

pub use activity_rules::{ActivityRules, CategoryRule};
pub use distance_schedule::{DistanceSchedule, ScheduleStep};
pub use education_rules::EducationRules;
pub use scoring_rules::ScoringRules;
pub use stable_rules::{PercentileBucket, StableCommunityRules};
pub use transportation_rules::TransportationRules;
