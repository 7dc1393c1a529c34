pub mod activity;
pub mod bundle;
pub mod coordinate;
pub mod school;
pub mod tract;
pub mod transit;

pub use bundle::ReferenceBundle;
pub use coordinate::SiteCoordinate;
