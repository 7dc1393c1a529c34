pub mod model;
pub mod score;
pub mod util;
