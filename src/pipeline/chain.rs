use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::{
        item::Item,
        outcome::{CrawlSuccess, DropReason, Outcome},
    },
    pipeline::Pipeline,
};

/// Ordered list of pipeline stages an item is passed through.
#[derive(Default)]
pub struct PipelineChain {
    stages: Vec<Box<dyn Pipeline>>,
}

/// Final state of an item after the chain.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Every stage passed the item.
    Completed(Item),
    /// A stage dropped the item, later stages never saw it.
    Dropped(DropReason),
}

/// Result of running one item through the chain.
#[derive(Debug)]
pub struct ItemReport {
    pub outcome: ItemOutcome,
    /// Crawl successes reported by the stages, in stage order.
    pub crawl_successes: Vec<CrawlSuccess>,
}

impl PipelineChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the chain
    pub fn with_stage<P: Pipeline + 'static>(mut self, stage: P) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Runs an item through every stage until one drops it
    ///
    /// # Returns
    /// - `Ok(ItemReport)`: Item completed or was dropped, with reported crawl successes
    /// - `Err(Error)`: A stage failed, the item is neither completed nor dropped
    pub async fn process(&self, item: Item) -> Result<ItemReport, Error> {
        let mut item = item;
        let mut crawl_successes = Vec::new();

        for stage in &self.stages {
            let apk_name = item.apk_name().to_string();

            let processed = stage.process_item(item).await.map_err(|e| {
                tracing::error!("{} failed to process {}: {}", stage.name(), apk_name, e);
                e
            })?;

            crawl_successes.extend(processed.crawl_success);

            match processed.outcome {
                Outcome::Continue(next) => item = next,
                Outcome::Drop(reason) => {
                    tracing::info!("{} dropped item: {}", stage.name(), reason);

                    return Ok(ItemReport {
                        outcome: ItemOutcome::Dropped(reason),
                        crawl_successes,
                    });
                }
            }
        }

        Ok(ItemReport {
            outcome: ItemOutcome::Completed(item),
            crawl_successes,
        })
    }

    /// Closes every stage, stopping at the first failure
    pub async fn close(&self) -> Result<(), Error> {
        for stage in &self.stages {
            stage.close().await?;
        }

        Ok(())
    }
}
