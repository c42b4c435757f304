//! Image resource implementation.
//!
//! Product images are nested under products:
//! - `GET /products/{product_id}/images.json`
//! - `GET /products/{product_id}/images/count.json`
//! - `GET /products/{product_id}/images/{id}.json`
//! - `POST /products/{product_id}/images.json`
//! - `PUT /products/{product_id}/images/{id}.json`
//! - `DELETE /products/{product_id}/images/{id}.json`
//!
//! Images can be uploaded from a URL (`src`) or as base64 data
//! (`attachment`, see [`Image::with_attachment`]).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{CountOptions, ResourceOperation, ResourcePath, RestResource};

/// A product image.
///
/// `width`, `height`, `created_at`, `updated_at` and `admin_graphql_api_id`
/// are read-only and never sent. `id` travels in the path, not the body.
///
/// # Example
///
/// ```rust
/// use shopify_image_api::Image;
///
/// let image = Image {
///     src: Some("https://example.com/ipod-nano.png".to_string()),
///     variant_ids: vec![808950810, 808950811],
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&image).unwrap();
/// assert_eq!(json["variant_ids"][1], 808950811);
/// assert!(json.get("id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// The unique identifier of the image.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product this image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Display position, starting at 1 for the main image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// Source URL of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Base64-encoded image data, used instead of `src` for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// File name for an `attachment` upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing)]
    pub width: Option<u32>,

    /// Height in pixels.
    #[serde(skip_serializing)]
    pub height: Option<u32>,

    /// Variants this image is shown for, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_ids: Vec<u64>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// When the image was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the image was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API id.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Image {
    /// Builds an image to upload from raw bytes.
    ///
    /// ```rust
    /// use shopify_image_api::Image;
    ///
    /// let image = Image::with_attachment(b"GIF89a");
    /// assert_eq!(image.attachment.as_deref(), Some("R0lGODlh"));
    /// ```
    #[must_use]
    pub fn with_attachment(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            attachment: Some(STANDARD.encode(bytes)),
            ..Self::default()
        }
    }
}

impl RestResource for Image {
    type Id = u64;
    type FindParams = ImageFindParams;
    type AllParams = ImageListParams;
    type CountParams = CountOptions;

    const NAME: &'static str = "Image";
    const PLURAL: &'static str = "images";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/images/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/images",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["product_id"],
            "products/{product_id}/images/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["product_id"],
            "products/{product_id}/images",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["product_id", "id"],
            "products/{product_id}/images/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/images/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for fetching a single image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImageFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing images.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImageListParams {
    /// Return only images after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{serialize_to_query, PathIds};

    #[test]
    fn test_image_serialization_omits_read_only_fields() {
        let image = Image {
            id: Some(850_703_190),
            product_id: Some(632_910_392),
            position: Some(1),
            src: Some("https://cdn.shopify.com/product.jpg".to_string()),
            width: Some(1200),
            height: Some(800),
            variant_ids: vec![808_950_810],
            created_at: Some(
                DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            admin_graphql_api_id: Some("gid://shopify/ProductImage/850703190".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&image).unwrap();

        assert_eq!(json["product_id"], 632_910_392);
        assert_eq!(json["position"], 1);
        assert_eq!(json["variant_ids"], serde_json::json!([808_950_810]));
        assert!(json.get("id").is_none());
        assert!(json.get("width").is_none());
        assert!(json.get("height").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("admin_graphql_api_id").is_none());
        assert!(json.get("alt").is_none());
        assert!(json.get("attachment").is_none());
    }

    #[test]
    fn test_image_deserializes_offset_timestamps_to_utc() {
        let json = r#"{
            "id": 1,
            "product_id": 1,
            "position": 1,
            "created_at": "2017-07-24T19:09:43-04:00",
            "updated_at": "2017-07-24T19:09:43-04:00",
            "width": 123,
            "height": 456,
            "src": "https://cdn.shopify.com/s/files/1/0006/9093/3842/products/ipod-nano.png?v=1500937783",
            "variant_ids": [808950810, 808950811]
        }"#;

        let image: Image = serde_json::from_str(json).unwrap();

        assert_eq!(image.id, Some(1));
        assert_eq!(image.width, Some(123));
        assert_eq!(image.height, Some(456));
        assert_eq!(image.variant_ids, vec![808_950_810, 808_950_811]);
        assert_eq!(
            image.created_at.unwrap().to_rfc3339(),
            "2017-07-24T23:09:43+00:00"
        );
    }

    #[test]
    fn test_image_without_variant_ids_has_empty_list() {
        let image: Image = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert!(image.variant_ids.is_empty());
    }

    #[test]
    fn test_with_attachment_encodes_base64() {
        let image = Image::with_attachment([0xFF_u8, 0xD8, 0xFF]);
        assert_eq!(image.attachment.as_deref(), Some("/9j/"));
        assert!(image.src.is_none());
    }

    #[test]
    fn test_image_paths_resolve() {
        let ids = PathIds::from([
            ("product_id", "632910392".to_string()),
            ("id", "850703190".to_string()),
        ]);

        assert_eq!(
            Image::resolve_path(ResourceOperation::Find, &ids).unwrap(),
            "products/632910392/images/850703190"
        );
        assert_eq!(
            Image::resolve_path(ResourceOperation::Count, &ids).unwrap(),
            "products/632910392/images/count"
        );
        assert_eq!(Image::resource_key(), "image");
    }

    #[test]
    fn test_image_paths_require_product_id() {
        let ids = PathIds::from([("id", "850703190".to_string())]);
        assert!(Image::resolve_path(ResourceOperation::Find, &ids).is_err());
    }

    #[test]
    fn test_list_params_omit_absent_values() {
        let params = ImageListParams {
            since_id: Some(850_703_190),
            fields: None,
        };

        let query = serialize_to_query(&params, Image::NAME).unwrap();

        assert_eq!(query.get("since_id"), Some(&"850703190".to_string()));
        assert!(!query.contains_key("fields"));
    }
}
