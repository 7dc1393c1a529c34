mod census_tract;
mod tract_indicators;

pub use census_tract::CensusTract;
pub use tract_indicators::{TractIndicators, INDICATOR_NAMES};
