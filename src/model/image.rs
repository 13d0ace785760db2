//! Image fetch requests and results.
//!
//! Each request carries the [`ImageSlot`] it will fill, and each result echoes it back,
//! so reassembling results onto an item never depends on their position in a list.

use crate::error::image::ImageError;

/// Item field an image download belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Logo,
    /// Index into the item's screenshot list.
    Screenshot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub slot: ImageSlot,
    pub url: String,
}

/// Downloaded image persisted by an [`crate::service::image::ImageStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub url: String,
    pub path: String,
}

#[derive(Debug)]
pub struct ImageResult {
    pub slot: ImageSlot,
    pub outcome: Result<StoredImage, ImageError>,
}
