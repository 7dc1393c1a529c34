use super::DatasetError;
use serde::{Deserialize, Serialize};
use sitescore_core::model::school::{SchoolLevel, StateAverageEntry};
use std::path::{Path, PathBuf};

/// names every reference dataset file for one scoring region. paths are
/// resolved relative to the manifest file's directory when loaded via
/// [`DatasetManifest::from_file`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DatasetManifest {
    pub transit_csv: PathBuf,
    pub rural_geojson: PathBuf,
    pub desirable_csv: PathBuf,
    pub undesirable_csv: PathBuf,
    pub food_access_csv: PathBuf,
    pub tract_shapefile: PathBuf,
    pub indicators_csv: PathBuf,
    pub school_csv: PathBuf,
    /// attendance-zone boundary files in descending priority order
    #[serde(default)]
    pub school_boundaries: Vec<BoundaryEntry>,
    /// state-average CCRPI rows; empty uses the built-in reference table
    #[serde(default)]
    pub state_averages: Vec<StateAverageEntry>,
    /// geographic extent of the map-layer grid, required by the layers app
    pub extent: Option<LayerExtent>,
}

/// one attendance-zone boundary file. a file may be pinned to a single
/// school level; unpinned files match records of any level.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoundaryEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub level: Option<SchoolLevel>,
    /// feature property carrying the school identifier
    #[serde(default = "default_school_id_property")]
    pub school_id_property: String,
}

fn default_school_id_property() -> String {
    String::from("school_id")
}

/// bounding box for the map-layer grid, in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LayerExtent {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl LayerExtent {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_latitude >= self.max_latitude {
            return Err(format!(
                "extent min_latitude {} must be below max_latitude {}",
                self.min_latitude, self.max_latitude
            ));
        }
        if self.min_longitude >= self.max_longitude {
            return Err(format!(
                "extent min_longitude {} must be below max_longitude {}",
                self.min_longitude, self.max_longitude
            ));
        }
        Ok(())
    }
}

impl DatasetManifest {
    /// reads a manifest TOML file and resolves its dataset paths against the
    /// manifest's own directory.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DatasetError::FileReadError(path.to_path_buf(), e.to_string()))?;
        let mut manifest: DatasetManifest = toml::from_str(&contents)
            .map_err(|e| DatasetError::ManifestError(path.to_path_buf(), e.to_string()))?;
        if let Some(base) = path.parent() {
            manifest.resolve(base);
        }
        Ok(manifest)
    }

    /// rewrites relative dataset paths to be rooted at `base`.
    pub fn resolve(&mut self, base: &Path) {
        for path in [
            &mut self.transit_csv,
            &mut self.rural_geojson,
            &mut self.desirable_csv,
            &mut self.undesirable_csv,
            &mut self.food_access_csv,
            &mut self.tract_shapefile,
            &mut self.indicators_csv,
            &mut self.school_csv,
        ] {
            if path.is_relative() {
                *path = base.join(&path);
            }
        }
        for entry in self.school_boundaries.iter_mut() {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
    }
}
