//! Metafield resource implementation.
//!
//! Metafields hang off an owner resource, and the owner decides the path:
//! - Product images: `/product_images/{image_id}/metafields/{id}`
//! - Products: `/products/{product_id}/metafields/{id}`
//! - Variants: `/variants/{variant_id}/metafields/{id}`
//! - Shop (global): `/metafields/{id}`
//!
//! One path table serves every owner through the `{owner}` and `{owner_id}`
//! placeholders, which [`MetafieldOwner::path_ids`] fills in.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_image_api::{Metafield, MetafieldOwner};
//! use shopify_image_api::rest::resources::metafield_type;
//!
//! let owner = MetafieldOwner::ProductImage(850703190);
//!
//! let metafield = Metafield {
//!     namespace: Some("affiliates".to_string()),
//!     key: Some("app_key".to_string()),
//!     value: Some("app_value".into()),
//!     metafield_type: Some(metafield_type::SINGLE_LINE_TEXT_FIELD.to_string()),
//!     ..Default::default()
//! };
//! let saved = metafield.create_for_owner(&client, owner).await?;
//!
//! let all = Metafield::all_for_owner(&client, owner, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::query::rfc3339;
use crate::rest::{
    CountOptions, PathIds, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
    RestResource,
};

/// Values for [`Metafield::metafield_type`].
pub mod metafield_type {
    /// A single line of text.
    pub const SINGLE_LINE_TEXT_FIELD: &str = "single_line_text_field";
    /// Multiple lines of text.
    pub const MULTI_LINE_TEXT_FIELD: &str = "multi_line_text_field";
    /// A whole number.
    pub const NUMBER_INTEGER: &str = "number_integer";
    /// A decimal number.
    pub const NUMBER_DECIMAL: &str = "number_decimal";
    /// `true` or `false`.
    pub const BOOLEAN: &str = "boolean";
    /// Arbitrary JSON.
    pub const JSON: &str = "json";
    /// A URL.
    pub const URL: &str = "url";
    /// An ISO 8601 date.
    pub const DATE: &str = "date";
}

/// The resource a metafield belongs to.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::MetafieldOwner;
///
/// let owner = MetafieldOwner::ProductImage(850703190);
/// assert_eq!(owner.path_segment(), Some("product_images"));
///
/// let ids = owner.path_ids();
/// assert_eq!(ids["owner"], "product_images");
/// assert_eq!(ids["owner_id"], "850703190");
///
/// assert!(MetafieldOwner::Shop.path_ids().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetafieldOwner {
    /// A product, by id.
    Product(u64),
    /// A product image, by id.
    ProductImage(u64),
    /// A product variant, by id.
    Variant(u64),
    /// The shop itself (global metafields).
    Shop,
}

impl MetafieldOwner {
    /// Returns the collection segment owning the metafields, or `None` for
    /// shop-level metafields.
    #[must_use]
    pub const fn path_segment(&self) -> Option<&'static str> {
        match self {
            Self::Product(_) => Some("products"),
            Self::ProductImage(_) => Some("product_images"),
            Self::Variant(_) => Some("variants"),
            Self::Shop => None,
        }
    }

    /// Returns the owner's id, or `None` for the shop.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Product(id) | Self::ProductImage(id) | Self::Variant(id) => Some(*id),
            Self::Shop => None,
        }
    }

    /// Returns the `owner` and `owner_id` placeholder values for this owner.
    #[must_use]
    pub fn path_ids(&self) -> PathIds {
        let mut ids = PathIds::new();
        if let (Some(segment), Some(id)) = (self.path_segment(), self.id()) {
            ids.insert("owner", segment.to_string());
            ids.insert("owner_id", id.to_string());
        }
        ids
    }

    fn item_ids(self, id: u64) -> PathIds {
        let mut ids = self.path_ids();
        ids.insert("id", id.to_string());
        ids
    }
}

/// A key/value pair attached to an owner resource.
///
/// `namespace` and `key` identify the metafield within its owner; the
/// server rejects duplicates. `value` is carried as JSON so text, numbers
/// and booleans all round-trip, and `metafield_type` (`type` on the wire)
/// says how to read it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metafield {
    /// The unique identifier of the metafield.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Groups related metafields, usually one namespace per app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The key within the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// How `value` is interpreted. See [`metafield_type`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the owning resource, as reported by the server.
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,

    /// Kind of the owning resource, as reported by the server.
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,

    /// When the metafield was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the metafield was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API id.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = CountOptions;

    const NAME: &'static str = "Metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        // Owned by a resource
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        // Shop-level
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "metafields/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "metafields"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "metafields/count",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "metafields"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "metafields/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Metafield {
    /// Lists one page of the owner's metafields.
    ///
    /// # Errors
    ///
    /// See [`RestResource::all_with_ids`].
    pub async fn all_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::all_with_ids(client, &owner.path_ids(), params).await
    }

    /// Counts the owner's metafields, optionally filtered by time bounds.
    ///
    /// # Errors
    ///
    /// See [`RestResource::count_with_ids`].
    pub async fn count_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        options: Option<CountOptions>,
    ) -> Result<u64, ResourceError> {
        Self::count_with_ids(client, &owner.path_ids(), options).await
    }

    /// Fetches one of the owner's metafields.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] if the owner has no metafield `id`.
    pub async fn find_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_with_ids(client, &owner.item_ids(id), params).await
    }

    /// Creates this metafield on the owner.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] if the server rejects it, for
    /// example on a duplicate namespace and key.
    pub async fn create_for_owner(
        &self,
        client: &RestClient,
        owner: MetafieldOwner,
    ) -> Result<Self, ResourceError> {
        self.create_with_ids(client, &owner.path_ids()).await
    }

    /// Updates this metafield on the owner. Requires `id`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] without sending anything if
    /// `id` is `None`.
    pub async fn update_for_owner(
        &self,
        client: &RestClient,
        owner: MetafieldOwner,
    ) -> Result<Self, ResourceError> {
        self.update_with_ids(client, &owner.path_ids()).await
    }

    /// Deletes one of the owner's metafields.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] if the owner has no metafield `id`.
    pub async fn delete_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        id: u64,
    ) -> Result<(), ResourceError> {
        Self::delete_with_ids(client, &owner.item_ids(id)).await
    }
}

/// Parameters for fetching a single metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListParams {
    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only metafields after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor from [`ResourceResponse::next_page_info`] or
    /// [`ResourceResponse::prev_page_info`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Only metafields created at or after this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only metafields created at or before this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only metafields updated at or after this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only metafields updated at or before this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339::serialize"
    )]
    pub updated_at_max: Option<DateTime<Utc>>,
}
