use crate::app::rules::load_scoring_rules;
use crate::dataset::{load_bundle, DatasetManifest};
use sitescore_core::model::SiteCoordinate;
use sitescore_core::score::calculate_scores;
use std::path::Path;

/// scores one candidate site against the manifest's reference datasets and
/// prints the criterion breakdown as JSON on stdout.
pub fn run(
    manifest_file: &Path,
    latitude: f64,
    longitude: f64,
    rules_file: Option<&Path>,
) -> Result<(), String> {
    let manifest = DatasetManifest::from_file(manifest_file).map_err(|e| e.to_string())?;
    let rules = load_scoring_rules(rules_file)?;
    let bundle = load_bundle(&manifest).map_err(|e| e.to_string())?;

    let site = SiteCoordinate::new(latitude, longitude);
    let breakdown = calculate_scores(&site, &bundle, &rules).map_err(|e| e.to_string())?;
    log::info!("site {} scored {}", site, breakdown.total_score);

    let json = serde_json::to_string_pretty(&breakdown).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
