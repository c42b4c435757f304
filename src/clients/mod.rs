//! HTTP transport for the REST Admin API.
//!
//! - [`HttpClient`]: authenticated async transport for one shop
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a validated request
//! - [`HttpResponse`]: status, headers and JSON body, with pagination and
//!   call limit headers parsed
//! - [`rest::RestClient`]: path-normalizing REST wrapper used by resources
//!
//! Requests are sent once. Rate limiting and retries are left to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
