use geo::MultiPolygon;

/// one census tract polygon from the TIGER/Line shapefile. GEOIDs are
/// unique within the loaded region.
#[derive(Clone, Debug)]
pub struct CensusTract {
    pub geoid: String,
    pub geometry: MultiPolygon<f64>,
}
