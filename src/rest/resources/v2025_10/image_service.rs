//! [`ImageService`]: product images and their metafields, by id.

use crate::clients::RestClient;
use crate::rest::{CountOptions, PathIds, ResourceError, ResourceResponse, RestResource};

use super::image::{Image, ImageFindParams, ImageListParams};
use super::metafield::{Metafield, MetafieldFindParams, MetafieldListParams, MetafieldOwner};

/// Typed access to the Image resource and image-scoped metafields.
///
/// The service only borrows the client, so any number of services (or
/// concurrent calls on one service) can share it.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_image_api::{CountOptions, Image, ImageService, RestClient};
///
/// let service = ImageService::new(&client);
///
/// let image = Image {
///     src: Some("https://example.com/ipod-nano.png".to_string()),
///     ..Default::default()
/// };
/// let created = service.create(632910392, &image).await?;
///
/// let total = service.count(632910392, None).await?;
/// let images = service.list(632910392, None).await?;
/// assert_eq!(images.len() as u64, total);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImageService<'a> {
    client: &'a RestClient,
}

impl<'a> ImageService<'a> {
    /// Creates a service backed by `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists one page of a product's images.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no `images` key.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<ImageListParams>,
    ) -> Result<ResourceResponse<Vec<Image>>, ResourceError> {
        Image::all_with_ids(self.client, &product_ids(product_id), params).await
    }

    /// Counts a product's images. With no options, or with every bound
    /// unset, no query string is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body is not `{"count": N}`.
    pub async fn count(
        &self,
        product_id: u64,
        options: Option<CountOptions>,
    ) -> Result<u64, ResourceError> {
        Image::count_with_ids(self.client, &product_ids(product_id), options).await
    }

    /// Fetches one image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the image does not exist.
    pub async fn get(
        &self,
        product_id: u64,
        image_id: u64,
        params: Option<ImageFindParams>,
    ) -> Result<ResourceResponse<Image>, ResourceError> {
        let mut ids = product_ids(product_id);
        ids.insert("id", image_id.to_string());
        Image::find_with_ids(self.client, &ids, params).await
    }

    /// Creates an image on a product and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects it.
    pub async fn create(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError> {
        image.create_with_ids(self.client, &product_ids(product_id)).await
    }

    /// Updates the image identified by `image.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] without sending a
    /// request if `image.id` is `None`.
    pub async fn update(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError> {
        image.update_with_ids(self.client, &product_ids(product_id)).await
    }

    /// Deletes one image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the image does not exist.
    pub async fn delete(&self, product_id: u64, image_id: u64) -> Result<(), ResourceError> {
        let mut ids = product_ids(product_id);
        ids.insert("id", image_id.to_string());
        Image::delete_with_ids(self.client, &ids).await
    }

    /// Lists one page of an image's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no `metafields` key.
    pub async fn list_metafields(
        &self,
        image_id: u64,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        Metafield::all_for_owner(self.client, MetafieldOwner::ProductImage(image_id), params).await
    }

    /// Counts an image's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body is not `{"count": N}`.
    pub async fn count_metafields(
        &self,
        image_id: u64,
        options: Option<CountOptions>,
    ) -> Result<u64, ResourceError> {
        Metafield::count_for_owner(self.client, MetafieldOwner::ProductImage(image_id), options)
            .await
    }

    /// Fetches one of an image's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield does not exist.
    pub async fn get_metafield(
        &self,
        image_id: u64,
        metafield_id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        Metafield::find_for_owner(
            self.client,
            MetafieldOwner::ProductImage(image_id),
            metafield_id,
            params,
        )
        .await
    }

    /// Creates a metafield on an image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects it.
    pub async fn create_metafield(
        &self,
        image_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        metafield
            .create_for_owner(self.client, MetafieldOwner::ProductImage(image_id))
            .await
    }

    /// Updates the image metafield identified by `metafield.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] without sending a
    /// request if `metafield.id` is `None`.
    pub async fn update_metafield(
        &self,
        image_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        metafield
            .update_for_owner(self.client, MetafieldOwner::ProductImage(image_id))
            .await
    }

    /// Deletes one of an image's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield does not exist.
    pub async fn delete_metafield(
        &self,
        image_id: u64,
        metafield_id: u64,
    ) -> Result<(), ResourceError> {
        Metafield::delete_for_owner(
            self.client,
            MetafieldOwner::ProductImage(image_id),
            metafield_id,
        )
        .await
    }
}

fn product_ids(product_id: u64) -> PathIds {
    PathIds::from([("product_id", product_id.to_string())])
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImageService<'static>>();
};
