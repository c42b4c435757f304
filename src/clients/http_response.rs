//! The [`HttpResponse`] type and Shopify-specific header parsing.

use std::collections::HashMap;

/// Call budget from the `X-Shopify-Shop-Api-Call-Limit` header (`"X/Y"`).
///
/// # Example
///
/// ```rust
/// use shopify_image_api::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests made in the current bucket.
    pub request_count: u32,
    /// Size of the bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an `"X/Y"` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;

        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }
}

/// Cursor pagination parsed from the `Link` header.
///
/// Shopify pages REST collections with opaque `page_info` cursors carried in
/// the `rel="next"` and `rel="previous"` links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Cursor for the previous page.
    pub prev_page_info: Option<String>,
    /// Cursor for the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses a header of the form `<url>; rel="next", <url>; rel="previous"`.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts.next() else { continue };
            let url = url.trim_start_matches('<').trim_end_matches('>');

            let rel = parts.find_map(|part| part.strip_prefix("rel=").map(|r| r.trim_matches('"')));
            let page_info = Self::extract_page_info(url);

            match (rel, page_info) {
                (Some("next"), Some(cursor)) => result.next_page_info = Some(cursor),
                (Some("previous"), Some(cursor)) => result.prev_page_info = Some(cursor),
                _ => {}
            }
        }

        result
    }

    /// Returns `true` when neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prev_page_info.is_none() && self.next_page_info.is_none()
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page_info")
            .map(|(_, value)| value.to_string())
    }
}

/// A response from the API.
///
/// Header names are stored lowercase; a header may repeat.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The JSON body. An empty body is represented as `{}`.
    pub body: serde_json::Value,
    /// Cursors from the `Link` header, when any were present.
    pub pagination: Option<PaginationInfo>,
    /// Call budget from `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a response, parsing the `Link` and call limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = first_header(&headers, "link")
            .map(PaginationInfo::parse_link_header)
            .filter(|info| !info.is_empty());

        let api_call_limit =
            first_header(&headers, "x-shopify-shop-api-call-limit").and_then(ApiCallLimit::parse);

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_header(&self.headers, "x-shopify-api-deprecated-reason")
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}
