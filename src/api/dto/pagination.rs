//! Pagination and filtering query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

pub const DEFAULT_LIMIT: u32 = 25;
pub const MAX_LIMIT: u32 = 1000;

/// `limit`/`offset` query parameters.
///
/// Uses `serde_with` to parse numbers from query strings, which keeps them
/// working when the struct is flattened into a larger query type.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,
}

impl LimitParams {
    /// Validates the parameters and converts them to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `limit`: 25
    /// - `offset`: 0
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries, or a message when `limit` is
    /// outside `1..=1000`.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = self.offset.unwrap_or(0);

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {MAX_LIMIT}"));
        }

        Ok((i64::from(offset), i64::from(limit)))
    }
}

/// Query parameters for listing physical feature classes.
#[derive(Debug, Deserialize)]
pub struct FeatureClassQuery {
    #[serde(flatten)]
    pub pagination: LimitParams,

    /// Only return classes attached to this station.
    pub refers_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<u32>, offset: Option<u32>) -> LimitParams {
        LimitParams { limit, offset }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 0);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_custom_limit_and_offset() {
        let (offset, limit) = params(Some(5), Some(10))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, 10);
        assert_eq!(limit, 5);
    }

    #[test]
    fn test_limit_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(Some(1), None).validate_and_get_offset_limit().is_ok());
        assert!(params(Some(1000), None).validate_and_get_offset_limit().is_ok());
        assert!(params(Some(1001), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_flattened_query_parses_strings() {
        let query: FeatureClassQuery =
            serde_json::from_str(r#"{"limit": "5", "refers_to": "67774010"}"#).unwrap();
        assert_eq!(query.pagination.limit, Some(5));
        assert_eq!(query.pagination.offset, None);
        assert_eq!(query.refers_to.as_deref(), Some("67774010"));
    }

    #[test]
    fn test_non_numeric_limit_is_error() {
        assert!(serde_json::from_str::<FeatureClassQuery>(r#"{"limit": "five"}"#).is_err());
    }
}
