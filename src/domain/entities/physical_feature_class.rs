//! Physical feature class entity.

/// A class of physical feature observed at a station.
///
/// `feature_class` is the primary key and the identifier used in URLs.
/// `refers_to`, when set, names an existing [`super::Station`].
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalFeatureClass {
    pub feature_class: String,
    pub description: Option<String>,
    pub refers_to: Option<String>,
}

/// Input data for creating a feature class.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPhysicalFeatureClass {
    pub feature_class: String,
    pub description: Option<String>,
    pub refers_to: Option<String>,
}

/// Partial update for a feature class.
///
/// Outer `None` leaves the column unchanged; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalFeatureClassPatch {
    pub description: Option<Option<String>>,
    pub refers_to: Option<Option<String>>,
}

impl PhysicalFeatureClassPatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.refers_to.is_none()
    }

    /// Applies the patch to an existing record.
    pub fn apply(self, mut current: PhysicalFeatureClass) -> PhysicalFeatureClass {
        if let Some(description) = self.description {
            current.description = description;
        }
        if let Some(refers_to) = self.refers_to {
            current.refers_to = refers_to;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PhysicalFeatureClass {
        PhysicalFeatureClass {
            feature_class: "RIVER".to_string(),
            description: Some("River bank".to_string()),
            refers_to: Some("67774010".to_string()),
        }
    }

    #[test]
    fn test_patch_default_is_empty() {
        assert!(PhysicalFeatureClassPatch::default().is_empty());
    }

    #[test]
    fn test_patch_changes_only_given_fields() {
        let patch = PhysicalFeatureClassPatch {
            description: Some(Some("Updated".to_string())),
            refers_to: None,
        };

        let updated = patch.apply(sample());

        assert_eq!(updated.description.as_deref(), Some("Updated"));
        assert_eq!(updated.refers_to.as_deref(), Some("67774010"));
        assert_eq!(updated.feature_class, "RIVER");
    }

    #[test]
    fn test_patch_can_clear_field() {
        let patch = PhysicalFeatureClassPatch {
            description: None,
            refers_to: Some(None),
        };

        let updated = patch.apply(sample());

        assert!(updated.refers_to.is_none());
        assert_eq!(updated.description.as_deref(), Some("River bank"));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let patch = PhysicalFeatureClassPatch {
            description: Some(Some("Same".to_string())),
            refers_to: None,
        };

        let once = patch.clone().apply(sample());
        let twice = patch.apply(once.clone());

        assert_eq!(once, twice);
    }
}
