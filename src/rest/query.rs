//! Query string parameters.
//!
//! Parameter structs derive `Serialize` with every field optional; unset
//! fields are skipped and never reach the query string.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::ResourceError;

/// Filters for count endpoints.
///
/// With every bound unset the count is unfiltered and no query string is
/// sent. Timestamps go out as RFC 3339 UTC, e.g. `2016-01-01T00:00:00Z`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use shopify_image_api::rest::{serialize_to_query, CountOptions};
///
/// let options = CountOptions {
///     created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
///     ..Default::default()
/// };
///
/// let query = serialize_to_query(&options, "Image").unwrap();
/// assert_eq!(query["created_at_min"], "2016-01-01T00:00:00Z");
/// assert_eq!(query.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Count items created at or after this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count items created at or before this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count items last updated at or after this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count items last updated at or before this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Whole-second RFC 3339 with a `Z` suffix, the form Shopify documents for
/// its timestamp filters.
pub(crate) mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_none(),
        }
    }
}

/// Flattens a parameter struct into query pairs.
///
/// `null` fields are dropped, arrays become comma-separated lists and nested
/// objects are sent as JSON.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Encode {
        resource,
        message: format!("invalid query parameters: {e}"),
    })?;

    let Value::Object(map) = value else {
        return Ok(HashMap::new());
    };

    let query = map
        .into_iter()
        .filter_map(|(key, val)| {
            let rendered = match val {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if values.is_empty() {
                        return None;
                    }
                    values.join(",")
                }
                object @ Value::Object(_) => object.to_string(),
            };
            Some((key, rendered))
        })
        .collect();

    Ok(query)
}
