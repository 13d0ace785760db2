//! Image fetch and storage error types.
//!
//! An [`ImageError`] attached to a single image result only leaves that image's path
//! unset on the item. It becomes a stage error only when the image store itself cannot
//! be initialised.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    /// Download failed at the transport level or returned a non-success status.
    #[error("Failed to download image {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Server answered with an empty body.
    #[error("Image {0} has an empty body")]
    EmptyBody(String),
    /// Image store could not write the downloaded bytes.
    #[error("Failed to store image: {0}")]
    Io(#[from] std::io::Error),
}
