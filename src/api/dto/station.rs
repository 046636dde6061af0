//! Station response shape.

use serde::Serialize;

use crate::domain::entities::Station;

/// A station as returned by `GET /stations` and the Climsoft station routes.
#[derive(Debug, Serialize)]
pub struct StationItem {
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

impl From<Station> for StationItem {
    fn from(s: Station) -> Self {
        Self {
            station_id: s.station_id,
            station_name: s.station_name,
            wmoid: s.wmoid,
            icaoid: s.icaoid,
            latitude: s.latitude,
            qualifier: s.qualifier,
            longitude: s.longitude,
            elevation: s.elevation,
            geolocation_method: s.geolocation_method,
            geolocation_accuracy: s.geolocation_accuracy,
            opening_datetime: s.opening_datetime,
            closing_datetime: s.closing_datetime,
            country: s.country,
            authority: s.authority,
            admin_region: s.admin_region,
            drainage_basin: s.drainage_basin,
            waca_selection: s.waca_selection,
            cpt_selection: s.cpt_selection,
            station_operational: s.station_operational,
        }
    }
}
