//! REST Admin API client.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with the
//! versioned base path (`/admin/api/{version}`) and path normalization:
//!
//! - leading slashes are stripped: `/products/1/images` -> `products/1/images.json`
//! - a trailing `.json` is stripped and re-added, so it appears exactly once
//! - a path that is empty after normalization is rejected
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_image_api::{RestClient, Session, ShopDomain};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "access-token");
//! let client = RestClient::new(&session, None)?;
//!
//! let response = client.get("products/632910392/images", None).await?;
//! println!("{}", response.body);
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
