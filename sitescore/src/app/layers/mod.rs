mod app;
mod grid;

pub use app::run;
pub use grid::grid_points;
