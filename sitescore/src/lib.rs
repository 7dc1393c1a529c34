pub mod app;
pub mod dataset;
