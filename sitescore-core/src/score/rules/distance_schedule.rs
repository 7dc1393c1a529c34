use serde::{Deserialize, Serialize};

/// one step of a distance-based point schedule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleStep {
    pub max_miles: f64,
    pub points: f64,
}

/// a step schedule mapping distance to points: a distance earns the points
/// of the tightest step whose radius still covers it. distances beyond the
/// widest step earn zero.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistanceSchedule(pub Vec<ScheduleStep>);

impl DistanceSchedule {
    pub fn new(steps: Vec<(f64, f64)>) -> Self {
        Self(
            steps
                .into_iter()
                .map(|(max_miles, points)| ScheduleStep { max_miles, points })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// widest step radius, the search radius for candidate lookups.
    pub fn max_radius(&self) -> f64 {
        self.0.iter().map(|s| s.max_miles).fold(0.0, f64::max)
    }

    /// points earned at the given distance.
    pub fn points_for(&self, distance_miles: f64) -> f64 {
        self.0
            .iter()
            .filter(|s| distance_miles <= s.max_miles)
            .map(|s| s.points)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> DistanceSchedule {
        DistanceSchedule::new(vec![(0.25, 6.0), (0.5, 5.0), (1.0, 4.0)])
    }

    #[test]
    fn test_tightest_covering_step_wins() {
        assert_eq!(schedule().points_for(0.1), 6.0);
        assert_eq!(schedule().points_for(0.44), 5.0);
        assert_eq!(schedule().points_for(0.9), 4.0);
    }

    #[test]
    fn test_beyond_widest_step_is_zero() {
        assert_eq!(schedule().points_for(1.5), 0.0);
    }

    #[test]
    fn test_max_radius() {
        assert_eq!(schedule().max_radius(), 1.0);
        assert_eq!(DistanceSchedule::new(vec![]).max_radius(), 0.0);
    }
}
