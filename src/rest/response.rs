//! [`ResourceResponse<T>`]: decoded data plus response metadata.
//!
//! The wrapper derefs to `T`, so a `ResourceResponse<Vec<Image>>` can be
//! iterated and indexed like the `Vec` itself:
//!
//! ```rust,ignore
//! let images = service.list(632910392, None).await?;
//! for image in images.iter() {
//!     println!("{:?}", image.src);
//! }
//! if let Some(cursor) = images.next_page_info() {
//!     // pass `cursor` as `page_info` to fetch the next page
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::{envelope, ResourceError};

/// A decoded resource together with pagination, call limit and request id.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::rest::ResourceResponse;
/// use shopify_image_api::clients::{ApiCallLimit, PaginationInfo};
///
/// let response = ResourceResponse::new(
///     vec![1_u64, 2, 3],
///     Some(PaginationInfo {
///         prev_page_info: None,
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///     }),
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert!(response.has_next_page());
/// assert!(!response.has_prev_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns `true` if the `Link` header pointed at a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_info().is_some()
    }

    /// Returns `true` if the `Link` header pointed at a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_info().is_some()
    }

    /// Cursor to pass as `page_info` for the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Cursor to pass as `page_info` for the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    /// Returns the parsed `Link` header, if any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Returns the call budget reported by the server.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the payload under `key` from a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if `key` is missing or the payload
    /// does not match `T`.
    pub fn from_http_response(
        mut response: HttpResponse,
        resource: &'static str,
        key: &str,
    ) -> Result<Self, ResourceError> {
        let data = envelope::unwrap(resource, &mut response.body, key)?;
        let request_id = response.request_id().map(ToString::to_string);

        Ok(Self {
            data,
            pagination: response.pagination,
            rate_limit: response.api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
