use super::DatasetError;
use sitescore_core::model::transit::TransitStop;
use std::path::Path;

/// reads the statewide transit locations CSV. expected columns: `name`,
/// `latitude`, `longitude`, `stop_type` (rail_hub | bus_rapid_transit |
/// fixed_route), optional `is_hub`.
pub fn load_transit_stops(path: &Path) -> Result<Vec<TransitStop>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))?;
    reader
        .deserialize::<TransitStop>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DatasetError::CsvError(path.to_path_buf(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitescore_core::model::transit::TransitMode;
    use std::io::Write;

    #[test]
    fn test_load_transit_stops() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,latitude,longitude,stop_type,is_hub").unwrap();
        writeln!(file, "Five Points,33.7540,-84.3917,rail_hub,true").unwrap();
        writeln!(file, "Peachtree & 10th,33.7812,-84.3858,fixed_route,false").unwrap();
        let stops = load_transit_stops(file.path()).unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].mode, TransitMode::RailHub);
        assert!(stops[0].is_hub);
        assert_eq!(stops[1].mode, TransitMode::FixedRoute);
    }

    #[test]
    fn test_bad_stop_type_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,latitude,longitude,stop_type,is_hub").unwrap();
        writeln!(file, "x,33.0,-84.0,gondola,false").unwrap();
        assert!(matches!(
            load_transit_stops(file.path()),
            Err(DatasetError::CsvError(_, _))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_transit_stops(Path::new("/nonexistent/transit.csv")).is_err());
    }
}
