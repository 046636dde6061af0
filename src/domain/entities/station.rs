//! Climsoft observation station.

/// A physical observation site from the Climsoft `station` table.
///
/// `station_id` is the primary key and the identifier other Climsoft records
/// reference. Opening and closing dates are kept as the free-form strings
/// Climsoft stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub station_name: Option<String>,
    pub wmoid: Option<String>,
    pub icaoid: Option<String>,
    pub latitude: Option<f64>,
    pub qualifier: Option<String>,
    pub longitude: Option<f64>,
    pub elevation: Option<String>,
    pub geolocation_method: Option<String>,
    pub geolocation_accuracy: Option<f64>,
    pub opening_datetime: Option<String>,
    pub closing_datetime: Option<String>,
    pub country: Option<String>,
    pub authority: Option<String>,
    pub admin_region: Option<String>,
    pub drainage_basin: Option<String>,
    pub waca_selection: bool,
    pub cpt_selection: bool,
    pub station_operational: bool,
}

impl Station {
    /// Creates a station with only its identifier and name set.
    pub fn new(station_id: impl Into<String>, station_name: Option<String>) -> Self {
        Self {
            station_id: station_id.into(),
            station_name,
            ..Default::default()
        }
    }
}
