//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Accounts in the auth database
//! - [`PgStationRepository`] - Climsoft stations
//! - [`PgPhysicalFeatureClassRepository`] - Climsoft physical feature classes

pub mod pg_physical_feature_class_repository;
pub mod pg_station_repository;
pub mod pg_user_repository;

pub use pg_physical_feature_class_repository::PgPhysicalFeatureClassRepository;
pub use pg_station_repository::PgStationRepository;
pub use pg_user_repository::PgUserRepository;
