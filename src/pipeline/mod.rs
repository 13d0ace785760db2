//! Item pipelines for crawled app store metadata.
//!
//! Every crawled item flows through the stages of a [`chain::PipelineChain`] in order:
//!
//! 1. [`filter::FilterPipeline`] drops detail items whose version is already stored
//! 2. [`identification::IdentificationPipeline`] registers newly discovered apps and drops
//!    already known ones
//! 3. [`image::AppImagePipeline`] downloads the logo and screenshots of detail items
//! 4. [`store::StoreAppPipeline`] persists detail items with their relations and notifies
//!    the sync API
//!
//! A stage either passes the item on or drops it with a reason. Either way it may report a
//! crawl success for the host crawler to act on.

pub mod chain;
pub mod filter;
pub mod identification;
pub mod image;
pub mod store;

use async_trait::async_trait;

use crate::{
    error::Error,
    model::{item::Item, outcome::Processed},
};

/// One processing stage of the item pipeline.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Name of the stage, used in logs.
    fn name(&self) -> &str;

    /// Processes one item, passing it on or dropping it.
    ///
    /// Items of a kind the stage does not handle are passed on unchanged.
    async fn process_item(&self, item: Item) -> Result<Processed, Error>;

    /// Called when the crawl is finishing.
    async fn close(&self) -> Result<(), Error> {
        Ok(())
    }
}
