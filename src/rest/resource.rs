//! The [`RestResource`] trait.
//!
//! A resource declares its name, collection key and path templates; the
//! trait supplies the six REST operations on top of them. Every operation
//! takes the path ids it needs (parent ids such as `product_id`, plus `id`
//! for single items), so nested resources share one implementation.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use shopify_image_api::rest::{CountOptions, ResourceOperation, ResourcePath, RestResource};
//! use shopify_image_api::HttpMethod;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Variant {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     pub title: Option<String>,
//! }
//!
//! impl RestResource for Variant {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = ();
//!     type CountParams = CountOptions;
//!
//!     const NAME: &'static str = "Variant";
//!     const PLURAL: &'static str = "variants";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["product_id"], "products/{product_id}/variants"),
//!         // ...
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let ids = PathIds::from([("product_id", "632910392".to_string())]);
//! let variants = Variant::all_with_ids(&client, &ids, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{HttpMethod, RestClient, RestError};
use crate::rest::{
    build_path, envelope, get_path, serialize_to_query, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse,
};

/// Path placeholder values, keyed by placeholder name.
pub type PathIds = HashMap<&'static str, String>;

/// A REST Admin API resource.
///
/// Implementors provide metadata; the default methods issue the requests,
/// map HTTP failures to [`ResourceError`] and unwrap the JSON envelopes.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The id type (always `u64` for Admin REST resources).
    type Id: Display + Clone + Send + Sync;

    /// Query parameters accepted by `find`.
    type FindParams: Serialize + Send + Sync;

    /// Query parameters accepted by `all`.
    type AllParams: Serialize + Send + Sync;

    /// Query parameters accepted by `count`.
    type CountParams: Serialize + Send + Sync;

    /// Singular type name used in errors and logs (e.g. "Image").
    const NAME: &'static str;

    /// Collection envelope key (e.g. "images").
    const PLURAL: &'static str;

    /// Path templates, one or more per operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the id, or `None` for a resource not yet created.
    fn get_id(&self) -> Option<Self::Id>;

    /// Singular envelope key (e.g. "image").
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// Resolves the most specific path for `operation` given `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no template's
    /// required ids are all present.
    fn resolve_path(operation: ResourceOperation, ids: &PathIds) -> Result<String, ResourceError> {
        Self::resolve_route(operation, ids).map(|(_, path)| path)
    }

    /// Like [`resolve_path`](Self::resolve_path), but also returns the HTTP
    /// method the chosen template declares.
    ///
    /// # Errors
    ///
    /// See [`resolve_path`](Self::resolve_path).
    fn resolve_route(
        operation: ResourceOperation,
        ids: &PathIds,
    ) -> Result<(HttpMethod, String), ResourceError> {
        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok((path.http_method, build_path(path.template, ids)))
    }

    /// Fetches one resource. `ids` must include `id`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] on 404, [`ResourceError::Decode`] if the
    /// body lacks the singular envelope, and transport errors otherwise.
    async fn find_with_ids(
        client: &RestClient,
        ids: &PathIds,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (http_method, path) = Self::resolve_route(ResourceOperation::Find, ids)?;
        let query = build_query::<Self, _>(params)?;
        tracing::debug!("{} find at {}", Self::NAME, path);

        let response = client
            .request(http_method, &path, None, query)
            .await
            .map_err(|e| Self::map_error(e, ids))?;

        ResourceResponse::from_http_response(response, Self::NAME, &Self::resource_key())
    }

    /// Lists one page of resources.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Decode`] if the body lacks the plural envelope, and
    /// transport errors otherwise.
    async fn all_with_ids(
        client: &RestClient,
        ids: &PathIds,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let (http_method, path) = Self::resolve_route(ResourceOperation::All, ids)?;
        let query = build_query::<Self, _>(params)?;
        tracing::debug!("{} list at {}", Self::NAME, path);

        let response = client
            .request(http_method, &path, None, query)
            .await
            .map_err(|e| Self::map_error(e, ids))?;

        ResourceResponse::from_http_response(response, Self::NAME, Self::PLURAL)
    }

    /// Counts resources, optionally filtered.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Decode`] if the body is not `{"count": N}`, and
    /// transport errors otherwise.
    async fn count_with_ids(
        client: &RestClient,
        ids: &PathIds,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let (http_method, path) = Self::resolve_route(ResourceOperation::Count, ids)?;
        let query = build_query::<Self, _>(params)?;
        tracing::debug!("{} count at {}", Self::NAME, path);

        let response = client
            .request(http_method, &path, None, query)
            .await
            .map_err(|e| Self::map_error(e, ids))?;

        envelope::unwrap_count(Self::NAME, &response.body)
    }

    /// Creates this resource and returns the server's copy.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on 422, [`ResourceError::Encode`]
    /// if `self` cannot be serialized, and transport errors otherwise.
    async fn create_with_ids(
        &self,
        client: &RestClient,
        ids: &PathIds,
    ) -> Result<Self, ResourceError> {
        let (http_method, path) = Self::resolve_route(ResourceOperation::Create, ids)?;
        let key = Self::resource_key();
        let body = envelope::wrap(Self::NAME, &key, self)?;
        tracing::debug!("{} create at {}", Self::NAME, path);

        let response = client
            .request(http_method, &path, Some(body), None)
            .await
            .map_err(|e| Self::map_error(e, ids))?;

        Ok(ResourceResponse::<Self>::from_http_response(response, Self::NAME, &key)?.into_inner())
    }

    /// Updates this resource in place on the server and returns the
    /// canonical copy. The id in the path comes from [`get_id`](Self::get_id).
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] before any request if the
    /// resource has no id, otherwise as for
    /// [`create_with_ids`](Self::create_with_ids), plus
    /// [`ResourceError::NotFound`] on 404.
    async fn update_with_ids(
        &self,
        client: &RestClient,
        ids: &PathIds,
    ) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: ResourceOperation::Update.as_str(),
        })?;

        let mut ids = ids.clone();
        ids.insert("id", id.to_string());

        let (http_method, path) = Self::resolve_route(ResourceOperation::Update, &ids)?;
        let key = Self::resource_key();
        let body = envelope::wrap(Self::NAME, &key, self)?;
        tracing::debug!("{} update at {}", Self::NAME, path);

        let response = client
            .request(http_method, &path, Some(body), None)
            .await
            .map_err(|e| Self::map_error(e, &ids))?;

        Ok(ResourceResponse::<Self>::from_http_response(response, Self::NAME, &key)?.into_inner())
    }

    /// Deletes one resource. `ids` must include `id`.
    ///
    /// A 2xx reply with an empty or JSON body counts as success; any
    /// other 2xx body is a [`ResourceError::Decode`].
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] on 404, [`ResourceError::Decode`] on a
    /// non-JSON 2xx body, and transport errors otherwise.
    async fn delete_with_ids(client: &RestClient, ids: &PathIds) -> Result<(), ResourceError> {
        let (http_method, path) = Self::resolve_route(ResourceOperation::Delete, ids)?;
        tracing::debug!("{} delete at {}", Self::NAME, path);

        client
            .request(http_method, &path, None, None)
            .await
            .map_err(|e| Self::map_error(e, ids))?;

        Ok(())
    }

    /// Maps a client failure, naming this resource and the `id` in `ids`.
    #[must_use]
    fn map_error(error: RestError, ids: &PathIds) -> ResourceError {
        ResourceError::from_rest_error(error, Self::NAME, ids.get("id").map(String::as_str))
    }
}

fn build_query<R: RestResource, P: Serialize>(
    params: Option<P>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    Ok(params
        .map(|p| serialize_to_query(&p, R::NAME))
        .transpose()?
        .filter(|q| !q.is_empty()))
}
