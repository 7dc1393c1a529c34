mod attendance_zone;
mod school_level;
mod school_record;
mod state_averages;

pub use attendance_zone::{AttendanceZone, BoundaryDataset, ZoneInfo};
pub use school_level::SchoolLevel;
pub use school_record::SchoolRecord;
pub use state_averages::{StateAverageEntry, StateAverages};
