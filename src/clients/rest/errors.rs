//! Errors raised by [`RestClient`](super::RestClient).

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST client operations.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert_eq!(error.to_string(), "Invalid REST API path: ");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}
