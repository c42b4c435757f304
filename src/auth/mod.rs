//! Authentication state for API calls.
//!
//! Obtaining an access token (OAuth, token exchange, client credentials) is
//! outside this crate; callers bring a token and wrap it in a [`Session`].
//!
//! # Example
//!
//! ```rust
//! use shopify_image_api::{Session, ShopDomain};
//!
//! let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_abc");
//! assert!(session.is_active());
//! ```

pub mod session;

pub use session::Session;
