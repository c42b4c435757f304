//! REST resource layer.
//!
//! - [`RestResource`]: the six operations (find, all, count, create, update,
//!   delete) implemented once on top of a resource's path templates
//! - [`ResourceResponse<T>`]: decoded data plus pagination and call limits
//! - [`ResourceError`]: HTTP failures mapped to resource-level meaning
//! - [`envelope`]: the `{"image": {...}}` / `{"images": [...]}` wrappers
//! - [`resources`]: the concrete resources, [`Image`](resources::Image) and
//!   [`Metafield`](resources::Metafield), and the [`ImageService`](resources::ImageService)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_image_api::{ImageService, RestClient, Session, ShopDomain};
//!
//! let session = Session::new(ShopDomain::new("fooshop")?, "shpat_...");
//! let client = RestClient::new(&session, None)?;
//! let images = ImageService::new(&client);
//!
//! for image in images.list(632910392, None).await?.iter() {
//!     println!("{:?} {:?}", image.id, image.src);
//! }
//!
//! let count = images.count(632910392, None).await?;
//! println!("{count} images");
//! ```

mod errors;
mod path;
mod query;
mod resource;
mod response;

pub mod envelope;
pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use query::{serialize_to_query, CountOptions};
pub use resource::{PathIds, RestResource};
pub use response::ResourceResponse;
