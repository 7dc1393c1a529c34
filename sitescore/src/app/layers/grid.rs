use crate::dataset::LayerExtent;
use geo::Point;

/// generates a regular lat/lon grid of cell centers over the extent,
/// row-major from the southwest corner, both bounds inclusive.
pub fn grid_points(extent: &LayerExtent, cell_size: f64) -> Result<Vec<Point<f64>>, String> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(format!("cell size {} must be a positive number", cell_size));
    }
    extent.validate()?;

    // tolerance keeps bounds that are an exact multiple of the cell size
    // from losing their last row/column to floating point rounding
    let rows =
        ((extent.max_latitude - extent.min_latitude) / cell_size + 1e-9).floor() as usize + 1;
    let cols =
        ((extent.max_longitude - extent.min_longitude) / cell_size + 1e-9).floor() as usize + 1;
    let mut points = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let latitude = extent.min_latitude + row as f64 * cell_size;
        for col in 0..cols {
            let longitude = extent.min_longitude + col as f64 * cell_size;
            points.push(Point::new(longitude, latitude));
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> LayerExtent {
        LayerExtent {
            min_latitude: 33.0,
            max_latitude: 33.2,
            min_longitude: -84.2,
            max_longitude: -84.0,
        }
    }

    #[test]
    fn test_grid_covers_extent_inclusively() {
        let points = grid_points(&extent(), 0.1).unwrap();
        // 3 rows x 3 cols
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], Point::new(-84.2, 33.0));
        assert!((points[8].x() - -84.0).abs() < 1e-9);
        assert!((points[8].y() - 33.2).abs() < 1e-9);
    }

    #[test]
    fn test_coarse_cell_yields_southwest_corner_only_row() {
        let points = grid_points(&extent(), 1.0).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], Point::new(-84.2, 33.0));
    }

    #[test]
    fn test_invalid_cell_size_is_rejected() {
        assert!(grid_points(&extent(), 0.0).is_err());
        assert!(grid_points(&extent(), -0.1).is_err());
        assert!(grid_points(&extent(), f64::NAN).is_err());
    }
}
