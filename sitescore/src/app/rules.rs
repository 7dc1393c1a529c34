use sitescore_core::score::rules::ScoringRules;
use std::path::Path;

/// loads a scoring rules TOML file, or the published QAP defaults when no
/// file is given. the tables are validated before any scoring runs.
pub fn load_scoring_rules(path: Option<&Path>) -> Result<ScoringRules, String> {
    let rules = match path {
        None => ScoringRules::default(),
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("unable to read rules file {}: {}", path.display(), e))?;
            toml::from_str(&contents)
                .map_err(|e| format!("failure parsing rules file {}: {}", path.display(), e))?
        }
    };
    rules.validate().map_err(|e| e.to_string())?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_file_uses_defaults() {
        let rules = load_scoring_rules(None).unwrap();
        assert_eq!(rules.transportation.max_points, 6.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
                [education]
                above_average_points = 2.5
            "#
        )
        .unwrap();
        let rules = load_scoring_rules(Some(file.path())).unwrap();
        assert_eq!(rules.education.above_average_points, 2.5);
        assert_eq!(rules.stable_communities.max_points, 10.0);
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
                [transportation]
                tod = []
                fixed_route = []
            "#
        )
        .unwrap();
        assert!(load_scoring_rules(Some(file.path())).is_err());
    }
}
