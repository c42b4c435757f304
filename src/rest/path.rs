//! Path templates for REST resources.
//!
//! A resource lists one or more [`ResourcePath`]s per operation. When several
//! templates serve the same operation, [`get_path`] picks the one requiring
//! the most ids that are all available, so a metafield addressed through its
//! owner resolves to `product_images/{owner_id}/metafields` while a
//! shop-level metafield falls back to `metafields`.
//!
//! # Example
//!
//! ```rust
//! use shopify_image_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use shopify_image_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["product_id", "id"],
//!         "products/{product_id}/images/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", "632910392");
//! ids.insert("id", "850703190");
//! assert_eq!(build_path(path.template, &ids), "products/632910392/images/850703190");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// The operations a REST resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by id.
    Find,
    /// List resources.
    All,
    /// Create a resource.
    Create,
    /// Update a resource.
    Update,
    /// Delete a resource.
    Delete,
    /// Count resources.
    Count,
}

impl ResourceOperation {
    /// Returns the operation name, as used in errors and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// One URL template for one operation.
///
/// Templates use `{name}` placeholders, and `ids` lists the placeholders
/// the template needs.
///
/// ```rust
/// use shopify_image_api::rest::{ResourceOperation, ResourcePath};
/// use shopify_image_api::HttpMethod;
///
/// const IMAGE_COUNT: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Count,
///     &["product_id"],
///     "products/{product_id}/images/count",
/// );
/// assert_eq!(IMAGE_COUNT.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// Placeholder names the template requires.
    pub ids: &'static [&'static str],
    /// The URL template, relative to `/admin/api/{version}/`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of placeholders this path requires.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks that every required placeholder is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for `operation` whose ids are all
/// available, or `None` if there is none.
///
/// ```rust
/// use shopify_image_api::rest::{get_path, ResourceOperation, ResourcePath};
/// use shopify_image_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["owner", "owner_id"], "{owner}/{owner_id}/metafields"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "metafields"),
/// ];
///
/// let path = get_path(PATHS, ResourceOperation::All, &["owner", "owner_id"]);
/// assert_eq!(path.unwrap().template, "{owner}/{owner_id}/metafields");
///
/// let path = get_path(PATHS, ResourceOperation::All, &[]);
/// assert_eq!(path.unwrap().template, "metafields");
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces each `{name}` placeholder in `template` with its value from `ids`.
///
/// Placeholders with no entry in `ids` are left as they are.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
