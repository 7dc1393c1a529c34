use super::grid::grid_points;
use crate::app::rules::load_scoring_rules;
use crate::dataset::{load_bundle, DatasetManifest};
use geo::Point;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use sitescore_core::model::{ReferenceBundle, SiteCoordinate};
use sitescore_core::score::rules::ScoringRules;
use sitescore_core::score::{calculate_scores, ScoreBreakdown, ScoreError};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// builds the pre-computed score layers for the presentation shell: one
/// GeoJSON point layer per criterion plus total over a regular grid, and a
/// tract polygon layer of stable-communities scores.
pub fn run(
    manifest_file: &Path,
    output_dir: &Path,
    rules_file: Option<&Path>,
    cell_size: f64,
) -> Result<(), String> {
    let manifest = DatasetManifest::from_file(manifest_file).map_err(|e| e.to_string())?;
    let rules = load_scoring_rules(rules_file)?;
    let bundle = load_bundle(&manifest).map_err(|e| e.to_string())?;
    let extent = manifest.extent.as_ref().ok_or_else(|| {
        String::from("manifest has no [extent] table, required for layer building")
    })?;
    let points = grid_points(extent, cell_size)?;
    log::info!(
        "scoring {} grid cells at {} degree spacing",
        points.len(),
        cell_size
    );

    std::fs::create_dir_all(output_dir).map_err(|e| {
        format!(
            "unable to create output directory {}: {}",
            output_dir.display(),
            e
        )
    })?;

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("score grid cells")
            .total(points.len())
            .build()
            .map_err(|e| format!("progress bar error: {}", e))?,
    ));
    let scored: Vec<(Point<f64>, ScoreBreakdown)> = points
        .into_par_iter()
        .map(|point| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            let site = SiteCoordinate::new(point.y(), point.x());
            calculate_scores(&site, &bundle, &rules).map(|breakdown| (point, breakdown))
        })
        .collect::<Result<Vec<_>, ScoreError>>()
        .map_err(|e| e.to_string())?;
    eprintln!();

    let point_layers: [(&str, fn(&ScoreBreakdown) -> f64); 5] = [
        ("total_score.geojson", |b| b.total_score),
        ("community_transportation_score.geojson", |b| {
            b.community_transportation_options
        }),
        ("desirable_undesirable_score.geojson", |b| {
            b.desirable_undesirable_activities
        }),
        ("education_score.geojson", |b| b.quality_education_areas),
        ("stable_communities_score.geojson", |b| b.stable_communities),
    ];
    for (filename, select) in point_layers {
        write_point_layer(&output_dir.join(filename), &scored, select)?;
    }
    write_tract_layer(
        &output_dir.join("stable_communities_tracts.geojson"),
        &bundle,
        &rules,
    )?;
    log::info!("wrote 6 layer files to {}", output_dir.display());
    Ok(())
}

fn write_point_layer(
    path: &Path,
    scored: &[(Point<f64>, ScoreBreakdown)],
    select: fn(&ScoreBreakdown) -> f64,
) -> Result<(), String> {
    let features = scored
        .iter()
        .map(|(point, breakdown)| {
            let mut properties = serde_json::Map::new();
            properties.insert(String::from("score"), serde_json::json!(select(breakdown)));
            geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::from(&geo::Geometry::Point(*point))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    write_collection(path, features)
}

/// tract-level stable-communities layer: each tract polygon carries its
/// geoid and indicator score. tracts with no indicator row score 0; empty
/// geometries are filtered.
fn write_tract_layer(
    path: &Path,
    bundle: &ReferenceBundle,
    rules: &ScoringRules,
) -> Result<(), String> {
    let features = bundle
        .tract_geometries()
        .filter(|(_, geometry)| !geometry.0.is_empty())
        .map(|(geoid, geometry)| {
            let score = match bundle.indicators(geoid) {
                Some(indicators) => indicators
                    .values()
                    .iter()
                    .flatten()
                    .map(|percentile| rules.stable_communities.indicator_points(*percentile))
                    .sum::<f64>()
                    .clamp(0.0, rules.stable_communities.max_points),
                None => 0.0,
            };
            let mut properties = serde_json::Map::new();
            properties.insert(String::from("geoid"), serde_json::json!(geoid));
            properties.insert(String::from("score"), serde_json::json!(score));
            geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::from(&geo::Geometry::MultiPolygon(
                    geometry.clone(),
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    write_collection(path, features)
}

fn write_collection(path: &Path, features: Vec<geojson::Feature>) -> Result<(), String> {
    let collection = geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    let contents = serde_json::to_string(&collection)
        .map_err(|e| format!("failure serializing layer {}: {}", path.display(), e))?;
    std::fs::write(path, contents)
        .map_err(|e| format!("failure writing layer {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn breakdown(total: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            community_transportation_options: total,
            desirable_undesirable_activities: 0.0,
            quality_education_areas: 0.0,
            stable_communities: 0.0,
            total_score: total,
        }
    }

    #[test]
    fn test_write_point_layer_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("total_score.geojson");
        let scored = vec![
            (Point::new(-84.39, 33.75), breakdown(5.0)),
            (Point::new(-84.38, 33.76), breakdown(0.0)),
        ];
        write_point_layer(&path, &scored, |b| b.total_score).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed = geojson::GeoJson::from_str(&contents).unwrap();
        let collection = match parsed {
            geojson::GeoJson::FeatureCollection(fc) => fc,
            _ => panic!("expected a FeatureCollection"),
        };
        assert_eq!(collection.features.len(), 2);
        let score = collection.features[0]
            .properties
            .as_ref()
            .unwrap()
            .get("score")
            .unwrap()
            .as_f64()
            .unwrap();
        assert_eq!(score, 5.0);
    }
}
