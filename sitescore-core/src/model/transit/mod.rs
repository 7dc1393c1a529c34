mod transit_mode;
mod transit_stop;

pub use transit_mode::TransitMode;
pub use transit_stop::TransitStop;
