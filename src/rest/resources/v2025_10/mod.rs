//! Resources for Admin API version 2025-10.

mod image;
mod image_service;
mod metafield;

pub use image::{Image, ImageFindParams, ImageListParams};
pub use image_service::ImageService;
pub use metafield::{
    metafield_type, Metafield, MetafieldFindParams, MetafieldListParams, MetafieldOwner,
};
