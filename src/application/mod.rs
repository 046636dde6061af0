//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services hold repository trait objects so
//! HTTP tests can swap in in-memory stores.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Sign-in, sign-up and bearer token checks
//! - [`services::bootstrap_service::BootstrapService`] - Default account reconciliation at startup
//! - [`services::station_service::StationService`] - Climsoft station reads
//! - [`services::physical_feature_class_service::PhysicalFeatureClassService`] - Feature class CRUD

pub mod services;
