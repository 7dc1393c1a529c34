use crate::model::school::ZoneInfo;
use crate::model::ReferenceBundle;
use crate::score::rules::EducationRules;
use crate::score::ScoreError;
use geo::Point;
use itertools::Itertools;

/// calculator for the quality education areas criterion (0-3).
///
/// boundary datasets are consulted in their configured priority order and
/// the first dataset containing the site wins. the matched school is scored
/// on its most recent year carrying both a CCRPI value and a state average
/// for the school's level; Beat-the-Odds recognition adds a bonus before
/// clipping to the criterion maximum. a site outside every boundary file
/// scores 0.
pub struct QualityEducation<'a> {
    site: Point<f64>,
    bundle: &'a ReferenceBundle,
    rules: &'a EducationRules,
}

impl<'a> QualityEducation<'a> {
    pub fn new(site: Point<f64>, bundle: &'a ReferenceBundle, rules: &'a EducationRules) -> Self {
        Self {
            site,
            bundle,
            rules,
        }
    }

    pub fn calculate_score(&self) -> Result<f64, ScoreError> {
        self.rules.validate().map_err(ScoreError::InvalidRules)?;
        for dataset in self.bundle.boundaries() {
            if let Some(zone) = dataset.find(&self.site) {
                log::debug!(
                    "site matched attendance zone for school '{}' in dataset '{}'",
                    zone.school_id,
                    dataset.name
                );
                return Ok(self.score_zone(zone));
            }
        }
        Ok(0.0)
    }

    fn score_zone(&self, zone: &ZoneInfo) -> f64 {
        let records = match self.bundle.school_records(&zone.school_id) {
            Some(records) => records,
            None => {
                log::warn!(
                    "attendance zone references school '{}' absent from the performance dataset",
                    zone.school_id
                );
                return 0.0;
            }
        };
        let candidates = records
            .iter()
            .filter(|r| zone.level.map_or(true, |level| level == r.level))
            .sorted_by_key(|r| std::cmp::Reverse(r.year));
        for record in candidates {
            let ccrpi = match record.ccrpi {
                Some(value) => value,
                None => continue,
            };
            let average = match self.bundle.state_averages().get(record.level, record.year) {
                Some(value) => value,
                None => continue,
            };
            let mut points = self.rules.ccrpi_points(ccrpi, average);
            if record.beat_the_odds {
                points += self.rules.beat_the_odds_bonus;
            }
            return points.clamp(0.0, self.rules.max_points);
        }
        log::debug!(
            "school '{}' has no year with both a CCRPI value and a state average",
            zone.school_id
        );
        0.0
    }
}
