mod activity;
mod bundle;
mod dataset_error;
mod food_access;
mod geojson_ops;
mod indicators;
mod manifest;
mod rural;
mod school;
mod tract;
mod transit;

pub use activity::load_activities;
pub use bundle::load_bundle;
pub use dataset_error::DatasetError;
pub use food_access::load_food_access;
pub use geojson_ops::{feature_multipolygon, read_feature_collection, string_property};
pub use indicators::load_indicators;
pub use manifest::{BoundaryEntry, DatasetManifest, LayerExtent};
pub use rural::load_rural_union;
pub use school::{load_boundary_dataset, load_school_records};
pub use tract::load_tracts;
pub use transit::load_transit_stops;
