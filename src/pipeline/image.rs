use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::{
        image::{ImageRequest, ImageResult, ImageSlot},
        item::{AppDetailItem, Item},
        outcome::Processed,
    },
    pipeline::Pipeline,
    service::image::ImageFetcher,
};

/// Downloads the logo and screenshots of detail items.
///
/// Stored paths are written back onto the item. An image that could not be fetched keeps
/// no path and never fails the item.
pub struct AppImagePipeline {
    fetcher: ImageFetcher,
}

impl AppImagePipeline {
    pub fn new(fetcher: ImageFetcher) -> Self {
        Self { fetcher }
    }

    /// Builds one request per image of the item, logo first, then screenshots in order
    pub fn media_requests(detail: &AppDetailItem) -> Vec<ImageRequest> {
        let logo = detail.logo.iter().map(|logo| ImageRequest {
            slot: ImageSlot::Logo,
            url: logo.url.clone(),
        });
        let screenshots = detail
            .screenshots
            .iter()
            .enumerate()
            .map(|(index, screenshot)| ImageRequest {
                slot: ImageSlot::Screenshot(index),
                url: screenshot.url.clone(),
            });

        logo.chain(screenshots).collect()
    }

    /// Writes the stored path of every successful result onto the slot it was requested for
    pub fn item_completed(results: Vec<ImageResult>, detail: &mut AppDetailItem) {
        for result in results {
            let Ok(stored) = result.outcome else {
                continue;
            };

            let target = match result.slot {
                ImageSlot::Logo => detail.logo.as_mut(),
                ImageSlot::Screenshot(index) => detail.screenshots.get_mut(index),
            };

            match target {
                Some(image) => image.path = Some(stored.path),
                None => tracing::warn!(
                    "Image result for {:?} has no matching slot on {}",
                    result.slot,
                    detail.apk_name
                ),
            }
        }
    }
}

#[async_trait]
impl Pipeline for AppImagePipeline {
    fn name(&self) -> &str {
        "AppImagePipeline"
    }

    async fn process_item(&self, item: Item) -> Result<Processed, Error> {
        let mut detail = match item {
            Item::Detail(detail) => detail,
            other => return Ok(Processed::pass(other)),
        };

        let requests = Self::media_requests(&detail);
        let requested = requests.len();
        let results = self.fetcher.fetch_all(requests).await;
        let stored = results.iter().filter(|r| r.outcome.is_ok()).count();

        Self::item_completed(results, &mut detail);

        tracing::debug!(
            "Stored {} of {} images for {}",
            stored,
            requested,
            detail.apk_name
        );

        Ok(Processed::pass(Item::Detail(detail)))
    }
}
