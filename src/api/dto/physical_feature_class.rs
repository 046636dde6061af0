//! DTOs for the physical feature class endpoints.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::domain::entities::{
    NewPhysicalFeatureClass, PhysicalFeatureClass, PhysicalFeatureClassPatch,
};

#[derive(Debug, Serialize)]
pub struct PhysicalFeatureClassItem {
    pub feature_class: String,
    pub description: Option<String>,
    pub refers_to: Option<String>,
}

impl From<PhysicalFeatureClass> for PhysicalFeatureClassItem {
    fn from(c: PhysicalFeatureClass) -> Self {
        Self {
            feature_class: c.feature_class,
            description: c.description,
            refers_to: c.refers_to,
        }
    }
}

/// Request body for `POST /api/climsoft/v1/physical-feature-class`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePhysicalFeatureClassRequest {
    #[validate(length(min = 1, max = 255))]
    pub feature_class: String,

    #[validate(length(max = 255))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub refers_to: Option<String>,
}

impl From<CreatePhysicalFeatureClassRequest> for NewPhysicalFeatureClass {
    fn from(r: CreatePhysicalFeatureClassRequest) -> Self {
        Self {
            feature_class: r.feature_class,
            description: r.description,
            refers_to: r.refers_to,
        }
    }
}

/// Request body for `PUT /api/climsoft/v1/physical-feature-class/{feature_class}`.
///
/// Absent fields are left unchanged, `null` clears the column. The code
/// itself cannot be changed; a `feature_class` key is ignored.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePhysicalFeatureClassRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(min = 1, max = 255))]
    pub refers_to: Option<Option<String>>,
}

impl From<UpdatePhysicalFeatureClassRequest> for PhysicalFeatureClassPatch {
    fn from(r: UpdatePhysicalFeatureClassRequest) -> Self {
        Self {
            description: r.description,
            refers_to: r.refers_to,
        }
    }
}
