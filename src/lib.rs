//! # Shopify Image API
//!
//! A typed async client for the Shopify Admin REST API's product **Image**
//! resource and the **Metafields** attached to images.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, API host and API version
//! - [`Session`] carrying the shop and access token for requests
//! - An async HTTP client that reads pagination, call-limit and deprecation
//!   headers
//! - [`ImageService`]: list, count, get, create, update and delete images and
//!   their metafields
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_image_api::{ApiVersion, Session, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_10)
//!     .user_agent_prefix("ImageSync/2.1")
//!     .build();
//!
//! let session = Session::new(ShopDomain::new("fooshop").unwrap(), "shpat_access_token");
//! assert!(session.is_active());
//! # let _ = config;
//! ```
//!
//! ## Working with Images
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use shopify_image_api::{CountOptions, Image, ImageService, RestClient};
//!
//! let client = RestClient::new(&session, Some(&config))?;
//! let images = ImageService::new(&client);
//!
//! // Upload from a URL
//! let image = Image {
//!     src: Some("https://example.com/ipod-nano.png".to_string()),
//!     variant_ids: vec![808950810, 808950811],
//!     ..Default::default()
//! };
//! let created = images.create(632910392, &image).await?;
//!
//! // Count only images created since 2016
//! let options = CountOptions {
//!     created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
//!     ..Default::default()
//! };
//! let recent = images.count(632910392, Some(options)).await?;
//!
//! // Page through the list
//! let page = images.list(632910392, None).await?;
//! if let Some(cursor) = page.next_page_info() {
//!     // pass `cursor` as `page_info` for the next page
//! }
//! ```
//!
//! ## Errors
//!
//! Every resource operation returns [`ResourceError`]: `NotFound` for 404,
//! `ValidationFailed` for 422 (with per-field messages), `Decode` when a
//! response does not have the expected shape, and the transport error
//! otherwise.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (request lines at `debug`, deprecation
//! notices at `warn`) and installs no subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients, responses and errors are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpResponse, HttpResponseError,
    PaginationInfo, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::{
    metafield_type, Image, ImageFindParams, ImageListParams, ImageService, Metafield,
    MetafieldFindParams, MetafieldListParams, MetafieldOwner,
};
pub use rest::{CountOptions, ResourceError, ResourceResponse, RestResource};
