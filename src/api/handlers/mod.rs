//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod physical_feature_class;
pub mod stations;

pub use auth::{change_password_handler, sign_in_handler, sign_up_handler};
pub use health::health_handler;
pub use physical_feature_class::{
    create_feature_class_handler, delete_feature_class_handler, get_feature_class_handler,
    list_feature_classes_handler, update_feature_class_handler,
};
pub use stations::{all_stations_handler, get_station_handler, list_stations_handler};
