//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod auth;
pub mod envelope;
pub mod health;
pub mod pagination;
pub mod physical_feature_class;
pub mod station;

pub use envelope::ResultResponse;
