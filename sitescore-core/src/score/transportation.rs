use crate::model::transit::TransitMode;
use crate::model::ReferenceBundle;
use crate::score::rules::TransportationRules;
use crate::score::ScoreError;
use geo::Point;

/// calculator for the community transportation options criterion (0-6).
///
/// sites inside the USDA-rural union score on the fixed-route tier only
/// (max 3 points), even when a qualifying hub is nearby. non-rural sites
/// score on the TOD tier against the nearest qualifying hub, falling back
/// to the fixed-route tier when no hub is in range. no stop within any
/// qualifying radius scores 0, not an error.
pub struct CommunityTransportationOptions<'a> {
    site: Point<f64>,
    bundle: &'a ReferenceBundle,
    rules: &'a TransportationRules,
}

impl<'a> CommunityTransportationOptions<'a> {
    pub fn new(
        site: Point<f64>,
        bundle: &'a ReferenceBundle,
        rules: &'a TransportationRules,
    ) -> Self {
        Self {
            site,
            bundle,
            rules,
        }
    }

    pub fn calculate_score(&self) -> Result<f64, ScoreError> {
        self.rules.validate().map_err(ScoreError::InvalidRules)?;
        let score = if self.bundle.is_rural(&self.site) {
            self.fixed_route_score()
        } else {
            self.tod_score()
        };
        Ok(score.clamp(0.0, self.rules.max_points))
    }

    fn fixed_route_score(&self) -> f64 {
        let nearest = self.bundle.nearest_transit_stop(
            &self.site,
            self.rules.fixed_route.max_radius(),
            |stop| stop.mode == TransitMode::FixedRoute,
        );
        match nearest {
            Some((_, miles)) => self.rules.fixed_route.points_for(miles),
            None => 0.0,
        }
    }

    fn tod_score(&self) -> f64 {
        let nearest_hub =
            self.bundle
                .nearest_transit_stop(&self.site, self.rules.tod.max_radius(), |stop| {
                    stop.is_qualifying_hub()
                });
        match nearest_hub {
            Some((_, miles)) => self.rules.tod.points_for(miles),
            None => self.fixed_route_score(),
        }
    }
}
