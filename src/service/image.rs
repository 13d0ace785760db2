//! Image downloads and storage.
//!
//! [`ImageFetcher`] downloads every requested image concurrently and hands the bytes to an
//! [`ImageStore`]. Failures are per image: one broken screenshot never affects the others.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    error::image::ImageError,
    model::image::{ImageRequest, ImageResult, StoredImage},
};

/// Subdirectory of the image root holding full size downloads.
const FULL_DIR: &str = "full";

/// Destination for downloaded image bytes.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists the bytes downloaded from `url`, returning the stored path
    async fn persist(&self, url: &str, bytes: &[u8]) -> Result<String, ImageError>;
}

/// Stores images below a root directory as `full/<blake3 of url>.jpg`.
///
/// The returned path is relative to the root so records stay valid when the root moves.
/// Re-downloading the same URL overwrites the same file.
pub struct FilesystemImageStore {
    root: PathBuf,
}

impl FilesystemImageStore {
    /// Creates the store, making sure its directory tree exists
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, ImageError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join(FULL_DIR)).await?;

        Ok(Self { root })
    }

    /// Relative path an image downloaded from `url` is stored at
    pub fn path_for(url: &str) -> String {
        format!("{}/{}.jpg", FULL_DIR, blake3::hash(url.as_bytes()).to_hex())
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn persist(&self, url: &str, bytes: &[u8]) -> Result<String, ImageError> {
        let path = Self::path_for(url);
        tokio::fs::write(self.root.join(&path), bytes).await?;

        Ok(path)
    }
}

#[derive(Clone)]
pub struct ImageFetcher {
    http: reqwest::Client,
    store: Arc<dyn ImageStore>,
}

impl ImageFetcher {
    /// Creates a new instance of [`ImageFetcher`]
    pub fn new(http: reqwest::Client, store: Arc<dyn ImageStore>) -> Self {
        Self { http, store }
    }

    /// Downloads and stores all requested images concurrently
    ///
    /// Returns exactly one result per request, each tagged with the slot of its request.
    pub async fn fetch_all(&self, requests: Vec<ImageRequest>) -> Vec<ImageResult> {
        let futures = requests.into_iter().map(|request| async move {
            let outcome = self.fetch(&request.url).await;

            if let Err(e) = &outcome {
                tracing::warn!("Image for {:?} was not stored: {}", request.slot, e);
            }

            ImageResult {
                slot: request.slot,
                outcome,
            }
        });

        join_all(futures).await
    }

    async fn fetch(&self, url: &str) -> Result<StoredImage, ImageError> {
        let download = |source| ImageError::Download {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(download)?;
        let bytes = response.bytes().await.map_err(download)?;

        if bytes.is_empty() {
            return Err(ImageError::EmptyBody(url.to_string()));
        }

        let path = self.store.persist(url, &bytes).await?;

        Ok(StoredImage {
            url: url.to_string(),
            path,
        })
    }
}
