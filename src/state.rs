use std::sync::Arc;

use crate::application::services::{AuthService, PhysicalFeatureClassService, StationService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub station_service: Arc<StationService>,
    pub feature_class_service: Arc<PhysicalFeatureClassService>,
}
