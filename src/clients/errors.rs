//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: the server answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_image_api::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => eprintln!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody { code, source }) => eprintln!("bad JSON ({code}): {source}"),
//!     Err(HttpError::InvalidRequest(e)) => eprintln!("invalid request: {e}"),
//!     Err(HttpError::Network(e)) => eprintln!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful (non-2xx) response from the API.
///
/// `message` holds a JSON object with whichever of `errors`, `error`,
/// `error_description` and `error_reference` the server supplied, so callers
/// can parse it back into structured form.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error details in JSON format.
    pub message: String,
    /// The `X-Request-Id` of the failed request.
    pub error_reference: Option<String>,
}

/// A request that fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for the HTTP transport.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response whose body is not valid JSON.
    #[error("Response body with status {code} is not valid JSON: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or connection failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
