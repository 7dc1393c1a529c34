use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// qualifying radius and point value for one activity category. values are
/// stored positive for both kinds; the calculator negates undesirable awards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CategoryRule {
    pub radius_miles: f64,
    pub points: f64,
}

impl CategoryRule {
    pub fn new(radius_miles: f64, points: f64) -> Self {
        Self {
            radius_miles,
            points,
        }
    }
}

/// desirable/undesirable activities scoring rules. each category awards its
/// value at most once per site regardless of how many qualifying points are
/// nearby. grocery access is adjusted through the USDA food-access atlas via
/// the category named by `grocery_category`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ActivityRules {
    pub desirable: HashMap<String, CategoryRule>,
    pub undesirable: HashMap<String, CategoryRule>,
    pub grocery_category: String,
    pub min_points: f64,
    pub max_points: f64,
}

impl Default for ActivityRules {
    fn default() -> Self {
        let desirable = HashMap::from([
            (String::from("grocery"), CategoryRule::new(1.0, 2.0)),
            (String::from("healthcare"), CategoryRule::new(1.0, 2.0)),
            (String::from("pharmacy"), CategoryRule::new(0.5, 1.0)),
            (String::from("park"), CategoryRule::new(0.5, 1.5)),
            (String::from("library"), CategoryRule::new(1.0, 1.5)),
            (
                String::from("community_center"),
                CategoryRule::new(1.0, 1.5),
            ),
        ]);
        let undesirable = HashMap::from([
            (String::from("hazardous_site"), CategoryRule::new(1.0, 3.0)),
            (String::from("industrial"), CategoryRule::new(0.5, 2.0)),
            (String::from("landfill"), CategoryRule::new(2.0, 3.0)),
            (String::from("contamination"), CategoryRule::new(1.0, 3.0)),
            (String::from("junkyard"), CategoryRule::new(0.5, 2.0)),
        ]);
        Self {
            desirable,
            undesirable,
            grocery_category: String::from("grocery"),
            min_points: -20.0,
            max_points: 20.0,
        }
    }
}

impl ActivityRules {
    /// widest configured category radius, the search radius for candidate
    /// activity lookups.
    pub fn max_radius(&self) -> f64 {
        self.desirable
            .values()
            .chain(self.undesirable.values())
            .map(|r| r.radius_miles)
            .fold(0.0, f64::max)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.desirable.is_empty() && self.undesirable.is_empty() {
            return Err(String::from("activity category tables are both empty"));
        }
        if self.min_points >= self.max_points {
            return Err(format!(
                "activity bounds are inverted: [{}, {}]",
                self.min_points, self.max_points
            ));
        }
        for (category, rule) in self.desirable.iter().chain(self.undesirable.iter()) {
            if rule.radius_miles <= 0.0 || rule.points < 0.0 {
                return Err(format!(
                    "invalid rule for activity category '{}': radius {} points {}",
                    category, rule.radius_miles, rule.points
                ));
            }
        }
        Ok(())
    }
}
