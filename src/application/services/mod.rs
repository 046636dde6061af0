//! Business logic services for the application layer.

pub mod auth_service;
pub mod bootstrap_service;
pub mod physical_feature_class_service;
pub mod station_service;

pub use auth_service::{AuthService, Registration};
pub use bootstrap_service::{BootstrapOutcome, BootstrapService, DefaultUser};
pub use physical_feature_class_service::PhysicalFeatureClassService;
pub use station_service::StationService;
