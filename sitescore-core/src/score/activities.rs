use crate::model::activity::ActivityKind;
use crate::model::ReferenceBundle;
use crate::score::rules::{ActivityRules, CategoryRule};
use crate::score::ScoreError;
use geo::Point;
use itertools::Itertools;
use std::collections::HashMap;

/// calculator for the desirable/undesirable activities criterion (-20..20).
///
/// each category awards its configured value at most once, triggered by the
/// nearest qualifying point; additional points in the same category never
/// stack. grocery access is adjusted by the USDA food-access atlas: a tract
/// the atlas does not flag low-income/low-access earns the grocery award
/// regardless of measured store distance.
pub struct DesirableUndesirableActivities<'a> {
    site: Point<f64>,
    bundle: &'a ReferenceBundle,
    rules: &'a ActivityRules,
}

impl<'a> DesirableUndesirableActivities<'a> {
    pub fn new(site: Point<f64>, bundle: &'a ReferenceBundle, rules: &'a ActivityRules) -> Self {
        Self {
            site,
            bundle,
            rules,
        }
    }

    pub fn calculate_score(&self) -> Result<f64, ScoreError> {
        self.rules.validate().map_err(ScoreError::InvalidRules)?;

        let nearest = self.nearest_by_category();
        let mut total = 0.0;

        // category tables iterate in sorted order so floating-point summation
        // order is stable across runs
        for (category, rule) in self.rules.desirable.iter().sorted_by_key(|(c, _)| *c) {
            let awarded = if *category == self.rules.grocery_category {
                self.grocery_qualifies(&nearest, rule)
            } else {
                self.category_qualifies(&nearest, ActivityKind::Desirable, category, rule)
            };
            if awarded {
                total += rule.points;
            }
        }
        for (category, rule) in self.rules.undesirable.iter().sorted_by_key(|(c, _)| *c) {
            if self.category_qualifies(&nearest, ActivityKind::Undesirable, category, rule) {
                total -= rule.points;
            }
        }

        Ok(total.clamp(self.rules.min_points, self.rules.max_points))
    }

    /// distance in miles to the nearest activity point per (kind, category),
    /// within the widest configured radius.
    fn nearest_by_category(&self) -> HashMap<(ActivityKind, String), f64> {
        let mut nearest: HashMap<(ActivityKind, String), f64> = HashMap::new();
        for (activity, miles) in self
            .bundle
            .activities_within(&self.site, self.rules.max_radius())
        {
            nearest
                .entry((activity.kind, activity.category.clone()))
                .and_modify(|d| *d = d.min(miles))
                .or_insert(miles);
        }
        nearest
    }

    fn category_qualifies(
        &self,
        nearest: &HashMap<(ActivityKind, String), f64>,
        kind: ActivityKind,
        category: &str,
        rule: &CategoryRule,
    ) -> bool {
        nearest
            .get(&(kind, category.to_string()))
            .map(|miles| *miles <= rule.radius_miles)
            .unwrap_or(false)
    }

    fn grocery_qualifies(
        &self,
        nearest: &HashMap<(ActivityKind, String), f64>,
        rule: &CategoryRule,
    ) -> bool {
        let atlas_served = self
            .bundle
            .containing_tract(&self.site)
            .and_then(|geoid| self.bundle.food_access(geoid))
            .map(|record| !record.low_income_low_access)
            .unwrap_or(false);
        atlas_served
            || self.category_qualifies(
                nearest,
                ActivityKind::Desirable,
                &self.rules.grocery_category,
                rule,
            )
    }
}
