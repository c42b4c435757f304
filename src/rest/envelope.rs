//! JSON envelopes.
//!
//! The REST Admin API nests every payload under a key named after the
//! resource: `{"image": {...}}` for one item, `{"images": [...]}` for a
//! collection and `{"count": N}` for counts.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// Wraps `value` as `{key: value}`.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if `value` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::rest::envelope;
/// use serde_json::json;
///
/// let body = envelope::wrap("Image", "image", &json!({"position": 1})).unwrap();
/// assert_eq!(body, json!({"image": {"position": 1}}));
/// ```
pub fn wrap<T: Serialize>(
    resource: &'static str,
    key: &str,
    value: &T,
) -> Result<Value, ResourceError> {
    let inner = serde_json::to_value(value).map_err(|e| ResourceError::Encode {
        resource,
        message: e.to_string(),
    })?;

    let mut map = Map::new();
    map.insert(key.to_string(), inner);
    Ok(Value::Object(map))
}

/// Takes the payload under `key` out of `body` and decodes it.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if `key` is missing or the payload does
/// not match `T`.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::rest::envelope;
/// use serde_json::json;
///
/// let mut body = json!({"images": [{"id": 1}, {"id": 2}]});
/// let ids: Vec<serde_json::Value> = envelope::unwrap("Image", &mut body, "images").unwrap();
/// assert_eq!(ids.len(), 2);
/// ```
pub fn unwrap<T: DeserializeOwned>(
    resource: &'static str,
    body: &mut Value,
    key: &str,
) -> Result<T, ResourceError> {
    let payload = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ResourceError::Decode {
            resource,
            message: format!("missing key '{key}' in response body"),
        })?;

    serde_json::from_value(payload).map_err(|e| ResourceError::Decode {
        resource,
        message: format!("invalid '{key}': {e}"),
    })
}

/// Reads `N` from a `{"count": N}` body.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if `count` is missing or not an unsigned
/// integer.
pub fn unwrap_count(resource: &'static str, body: &Value) -> Result<u64, ResourceError> {
    body.get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| ResourceError::Decode {
            resource,
            message: "missing or invalid 'count' in response body".to_string(),
        })
}
