use super::{
    load_activities, load_boundary_dataset, load_food_access, load_indicators, load_rural_union,
    load_school_records, load_tracts, load_transit_stops, DatasetError, DatasetManifest,
};
use sitescore_core::model::school::StateAverages;
use sitescore_core::model::ReferenceBundle;

/// loads every dataset the manifest names and assembles the immutable
/// reference bundle. any load failure or empty mandatory dataset fails the
/// whole assembly; the bundle never half-loads.
pub fn load_bundle(manifest: &DatasetManifest) -> Result<ReferenceBundle, DatasetError> {
    let transit_stops = load_transit_stops(&manifest.transit_csv)?;
    if transit_stops.is_empty() {
        return Err(DatasetError::EmptyDataset(String::from("transit stops")));
    }
    log::info!("loaded {} transit stops", transit_stops.len());

    let rural_union = load_rural_union(&manifest.rural_geojson)?;
    log::info!("loaded rural area union ({} polygons)", rural_union.0.len());

    let activities = load_activities(&manifest.desirable_csv, &manifest.undesirable_csv)?;
    if activities.is_empty() {
        return Err(DatasetError::EmptyDataset(String::from("activity points")));
    }
    log::info!("loaded {} activity points", activities.len());

    let food_access = load_food_access(&manifest.food_access_csv)?;
    if food_access.is_empty() {
        log::warn!("food-access atlas is empty; grocery scoring will use store distance only");
    } else {
        log::info!("loaded {} food-access tract records", food_access.len());
    }

    let tracts = load_tracts(&manifest.tract_shapefile)?;
    if tracts.is_empty() {
        return Err(DatasetError::EmptyDataset(String::from("census tracts")));
    }
    log::info!("loaded {} census tracts", tracts.len());

    let indicators = load_indicators(&manifest.indicators_csv)?;
    if indicators.is_empty() {
        return Err(DatasetError::EmptyDataset(String::from(
            "stable-communities indicators",
        )));
    }
    log::info!("loaded indicators for {} tracts", indicators.len());

    let schools = load_school_records(&manifest.school_csv)?;
    if schools.is_empty() {
        return Err(DatasetError::EmptyDataset(String::from("school records")));
    }
    log::info!("loaded {} school performance rows", schools.len());

    let boundaries = manifest
        .school_boundaries
        .iter()
        .map(load_boundary_dataset)
        .collect::<Result<Vec<_>, _>>()?;
    if boundaries.is_empty() {
        log::warn!("no attendance-zone boundary files configured; education scores will be 0");
    }
    for dataset in boundaries.iter() {
        log::info!("loaded {} zones from '{}'", dataset.len(), dataset.name);
    }

    let state_averages = if manifest.state_averages.is_empty() {
        StateAverages::default()
    } else {
        StateAverages::from(manifest.state_averages.clone())
    };

    let bundle = ReferenceBundle::new(
        transit_stops,
        rural_union,
        activities,
        food_access,
        tracts,
        indicators,
        schools,
        boundaries,
        state_averages,
    )?;
    Ok(bundle)
}
