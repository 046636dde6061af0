//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Accounts in the auth database
//! - [`StationRepository`] - Read access to Climsoft stations
//! - [`PhysicalFeatureClassRepository`] - Feature class CRUD
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod physical_feature_class_repository;
pub mod station_repository;
pub mod user_repository;

pub use physical_feature_class_repository::{FeatureClassFilter, PhysicalFeatureClassRepository};
pub use station_repository::StationRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use physical_feature_class_repository::MockPhysicalFeatureClassRepository;
#[cfg(test)]
pub use station_repository::MockStationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
