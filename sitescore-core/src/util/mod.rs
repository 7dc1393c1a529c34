pub mod geo_utils;
pub mod point_rtree;
pub mod polygonal_rtree;
