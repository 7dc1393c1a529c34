mod activity_kind;
mod activity_point;
mod food_access;

pub use activity_kind::ActivityKind;
pub use activity_point::ActivityPoint;
pub use food_access::FoodAccessRecord;
