//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns. Each one
//! has a separate input struct for creation and, where records are mutable,
//! a patch struct for partial updates.
//!
//! # Entity Types
//!
//! - [`AuthUser`] - A gateway account in the auth store
//! - [`Station`] - A Climsoft observation site
//! - [`PhysicalFeatureClass`] - A physical characteristic class attached to a station

pub mod physical_feature_class;
pub mod station;
pub mod user;

pub use physical_feature_class::{
    NewPhysicalFeatureClass, PhysicalFeatureClass, PhysicalFeatureClassPatch,
};
pub use station::Station;
pub use user::{AuthUser, NewUser};
