use crate::model::ReferenceBundle;
use crate::score::rules::StableCommunityRules;
use crate::score::ScoreError;
use geo::Point;

/// calculator for the stable communities criterion (0-10).
///
/// the containing census tract's five indicator percentiles are each
/// bucket-scored and summed. missing indicator cells are neutral (skipped),
/// never zeroing the whole tract. a site outside every tract scores 0.
pub struct StableCommunities<'a> {
    site: Point<f64>,
    bundle: &'a ReferenceBundle,
    rules: &'a StableCommunityRules,
}

impl<'a> StableCommunities<'a> {
    pub fn new(
        site: Point<f64>,
        bundle: &'a ReferenceBundle,
        rules: &'a StableCommunityRules,
    ) -> Self {
        Self {
            site,
            bundle,
            rules,
        }
    }

    pub fn calculate_score(&self) -> Result<f64, ScoreError> {
        self.rules.validate().map_err(ScoreError::InvalidRules)?;
        let geoid = match self.bundle.containing_tract(&self.site) {
            Some(geoid) => geoid,
            None => return Ok(0.0),
        };
        let indicators = match self.bundle.indicators(geoid) {
            Some(indicators) => indicators,
            None => {
                log::warn!("tract {} has no stable-communities indicator row", geoid);
                return Ok(0.0);
            }
        };
        let total: f64 = indicators
            .values()
            .iter()
            .flatten()
            .map(|percentile| self.rules.indicator_points(*percentile))
            .sum();
        Ok(total.clamp(0.0, self.rules.max_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tract::TractIndicators;
    use crate::score::test_fixtures::{square, BundleFixture};

    const SITE_LAT: f64 = 33.7490;
    const SITE_LON: f64 = -84.3880;

    fn site() -> Point<f64> {
        Point::new(SITE_LON, SITE_LAT)
    }

    fn indicators(geoid: &str, values: [Option<f64>; 5]) -> TractIndicators {
        TractIndicators {
            geoid: geoid.to_string(),
            above_poverty: values[0],
            median_income: values[1],
            transit_access: values[2],
            jobs_proximity: values[3],
            environmental_health: values[4],
        }
    }

    #[test]
    fn test_outside_all_tracts_scores_zero() {
        let bundle = BundleFixture::new()
            .with_tract("13121001100", square(0.0, 0.0, 0.5))
            .build();
        let rules = StableCommunityRules::default();
        let score = StableCommunities::new(site(), &bundle, &rules)
            .calculate_score()
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_best_case_tract_scores_maximum() {
        let bundle = BundleFixture::new()
            .with_tract("13121001100", square(SITE_LON, SITE_LAT, 0.1))
            .with_indicators(indicators(
                "13121001100",
                [Some(100.0), Some(95.0), Some(100.0), Some(99.0), Some(88.0)],
            ))
            .build();
        let rules = StableCommunityRules::default();
        let score = StableCommunities::new(site(), &bundle, &rules)
            .calculate_score()
            .unwrap();
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_missing_cells_are_neutral() {
        // two strong indicators, three missing: 4.0, not zero
        let bundle = BundleFixture::new()
            .with_tract("13121001100", square(SITE_LON, SITE_LAT, 0.1))
            .with_indicators(indicators(
                "13121001100",
                [Some(90.0), None, Some(85.0), None, None],
            ))
            .build();
        let rules = StableCommunityRules::default();
        let score = StableCommunities::new(site(), &bundle, &rules)
            .calculate_score()
            .unwrap();
        assert_eq!(score, 4.0);
    }

    #[test]
    fn test_tract_without_indicator_row_scores_zero() {
        let bundle = BundleFixture::new()
            .with_tract("13121001100", square(SITE_LON, SITE_LAT, 0.1))
            .build();
        let rules = StableCommunityRules::default();
        let score = StableCommunities::new(site(), &bundle, &rules)
            .calculate_score()
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_mixed_percentiles() {
        let bundle = BundleFixture::new()
            .with_tract("13121001100", square(SITE_LON, SITE_LAT, 0.1))
            .with_indicators(indicators(
                "13121001100",
                [Some(82.0), Some(60.0), Some(30.0), Some(55.0), Some(10.0)],
            ))
            .build();
        let rules = StableCommunityRules::default();
        let score = StableCommunities::new(site(), &bundle, &rules)
            .calculate_score()
            .unwrap();
        // 2 + 1 + 0 + 1 + 0
        assert_eq!(score, 4.0);
    }
}
