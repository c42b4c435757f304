//! Resource-level error types.
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`], with per-field messages
//! - **other non-2xx**: [`ResourceError::Http`]
//!
//! Bodies that cannot be decoded (malformed JSON, a missing envelope key, a
//! schema mismatch) surface as [`ResourceError::Decode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_image_api::rest::ResourceError;
//!
//! match images.get(632910392, 850703190, None).await {
//!     Ok(image) => println!("{:?}", image.src),
//!     Err(ResourceError::NotFound { resource, id }) => println!("{resource} {id} is gone"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "Image",
///     id: "850703190".to_string(),
/// };
/// assert_eq!(error.to_string(), "Image with id 850703190 not found");
///
/// let mut errors = HashMap::new();
/// errors.insert("src".to_string(), vec!["is invalid".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.request_id(), Some("abc-123"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name (e.g. "Image").
        resource: &'static str,
        /// The requested id, or "unknown" for collection requests.
        id: String,
    },

    /// The server rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field names mapped to error messages. Messages not tied to a
        /// field are stored under `base`.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// No path template matches the ids at hand.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted (e.g. "find", "update").
        operation: &'static str,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// The request payload or parameters could not be serialized.
    #[error("Failed to encode {resource} request: {message}")]
    Encode {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// An HTTP error without a more specific mapping.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST client error without a more specific mapping.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps an HTTP status code and error body to a `ResourceError`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_image_api::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"errors": "Not Found"}),
    ///     "Image",
    ///     Some("1"),
    ///     None,
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Maps a failed [`RestClient`](crate::clients::RestClient) call.
    ///
    /// 404 and 422 responses become [`ResourceError::NotFound`] and
    /// [`ResourceError::ValidationFailed`]; a 2xx body that is not JSON
    /// becomes [`ResourceError::Decode`]. Everything else is wrapped as is.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) if matches!(e.code, 404 | 422) => {
                let body = serde_json::from_str(&e.message).unwrap_or(serde_json::Value::Null);
                Self::from_http_response(e.code, &body, resource, id, e.error_reference.as_deref())
            }
            RestError::Http(HttpError::InvalidBody { source, .. }) => Self::Decode {
                resource,
                message: source.to_string(),
            },
            RestError::Http(e) => Self::Http(e),
            other => Self::Rest(other),
        }
    }

    /// Returns the `X-Request-Id` of the failed request, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

/// Parses Shopify's validation error shapes:
///
/// ```json
/// {"errors": {"src": ["is invalid"], "position": ["must be positive"]}}
/// {"errors": ["Image could not be downloaded"]}
/// {"errors": "Image could not be downloaded"}
/// {"error": "Image could not be downloaded"}
/// ```
///
/// A non-JSON body reaches here as `{"error": "<body text>"}`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    use serde_json::Value;

    fn messages(value: &Value) -> Vec<String> {
        match value {
            Value::Array(arr) => arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect(),
            Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        }
    }

    let mut result = HashMap::new();

    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, value) in map {
                result.insert(field.clone(), messages(value));
            }
        }
        Some(value @ (Value::Array(_) | Value::String(_))) => {
            let msgs = messages(value);
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        _ => {}
    }

    if result.is_empty() {
        if let Some(value) = body.get("error").filter(|v| !v.is_null()) {
            let msgs = messages(value);
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
