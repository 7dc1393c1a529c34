use crate::model::{ReferenceBundle, SiteCoordinate};
use crate::score::rules::ScoringRules;
use crate::score::{
    CommunityTransportationOptions, DesirableUndesirableActivities, QualityEducation, ScoreError,
    StableCommunities,
};
use serde::{Deserialize, Serialize};

/// the four criterion sub-scores for a site plus their exact sum.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub community_transportation_options: f64,
    pub desirable_undesirable_activities: f64,
    pub quality_education_areas: f64,
    pub stable_communities: f64,
    pub total_score: f64,
}

/// rejects non-finite or out-of-range coordinates before any calculator
/// runs. validation is the aggregator's precondition, not each
/// calculator's responsibility.
pub fn validate_coordinate(site: &SiteCoordinate) -> Result<(), ScoreError> {
    if !site.latitude.is_finite() || !site.longitude.is_finite() {
        return Err(ScoreError::InvalidCoordinate(
            site.latitude,
            site.longitude,
            String::from("coordinates must be finite"),
        ));
    }
    if !(-90.0..=90.0).contains(&site.latitude) {
        return Err(ScoreError::InvalidCoordinate(
            site.latitude,
            site.longitude,
            String::from("latitude must be in [-90, 90]"),
        ));
    }
    if !(-180.0..=180.0).contains(&site.longitude) {
        return Err(ScoreError::InvalidCoordinate(
            site.latitude,
            site.longitude,
            String::from("longitude must be in [-180, 180]"),
        ));
    }
    Ok(())
}

/// runs all four criterion calculators against the shared reference bundle
/// and sums their outputs. any calculator failure fails the whole
/// aggregation; a silently substituted zero would misrepresent the
/// incentive program's scoring.
pub fn calculate_scores(
    site: &SiteCoordinate,
    bundle: &ReferenceBundle,
    rules: &ScoringRules,
) -> Result<ScoreBreakdown, ScoreError> {
    validate_coordinate(site)?;
    let point = site.point();

    let ct = CommunityTransportationOptions::new(point, bundle, &rules.transportation)
        .calculate_score()?;
    let du =
        DesirableUndesirableActivities::new(point, bundle, &rules.activities).calculate_score()?;
    let qe = QualityEducation::new(point, bundle, &rules.education).calculate_score()?;
    let sc = StableCommunities::new(point, bundle, &rules.stable_communities).calculate_score()?;

    log::debug!(
        "site {}: transportation={} activities={} education={} stable={}",
        site,
        ct,
        du,
        qe,
        sc
    );

    Ok(ScoreBreakdown {
        community_transportation_options: ct,
        desirable_undesirable_activities: du,
        quality_education_areas: qe,
        stable_communities: sc,
        total_score: ct + du + qe + sc,
    })
}
