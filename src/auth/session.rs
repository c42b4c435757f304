//! The [`Session`] type used to authenticate requests.

use crate::config::ShopDomain;
use chrono::{DateTime, Utc};

/// An authenticated session for one shop.
///
/// The transport sends [`Session::access_token`] in the
/// `X-Shopify-Access-Token` header and addresses requests to
/// [`Session::shop`] unless an API host override is configured.
///
/// `Session` is `Send + Sync`, so one session can back many concurrent
/// requests.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use shopify_image_api::{Session, ShopDomain};
///
/// let session = Session::new(ShopDomain::new("my-store").unwrap(), "access-token")
///     .with_expiry(Utc::now() + Duration::hours(1));
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token for API authentication.
    pub access_token: String,

    /// When this session expires. Offline tokens never do.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session that never expires.
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: impl Into<String>) -> Self {
        Self {
            shop,
            access_token: access_token.into(),
            expires: None,
        }
    }

    /// Sets the expiry time of an online token.
    #[must_use]
    pub fn with_expiry(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time never expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if the session has a token and has not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
