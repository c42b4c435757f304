//! Concrete REST resources.
//!
//! Resources live in one module per Admin API version; the latest version is
//! re-exported here:
//!
//! ```rust,ignore
//! use shopify_image_api::rest::resources::Image;
//! // or, pinned:
//! use shopify_image_api::rest::resources::v2025_10::Image;
//! ```
//!
//! The request paths themselves are versioned by the client's
//! [`ApiVersion`](crate::ApiVersion); a version module only changes when a
//! resource's fields change.

pub mod v2025_10;

pub use v2025_10::*;
