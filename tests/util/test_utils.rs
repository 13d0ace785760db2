//! Pipeline stages wired to a test context.

use std::{path::Path, sync::Arc};

use apphub::{
    model::{
        item::{AppDetailItem, Item},
        outcome::{Outcome, Processed},
    },
    pipeline::{
        chain::PipelineChain, filter::FilterPipeline, identification::IdentificationPipeline,
        image::AppImagePipeline, store::StoreAppPipeline,
    },
    service::{
        image::{FilesystemImageStore, ImageFetcher},
        sync::SyncClient,
    },
};
use apphub_test_utils::TestContext;

/// Sync API client pointed at the mock server
pub fn sync_client(test: &TestContext) -> SyncClient {
    SyncClient::new(test.http.clone(), test.server_url())
}

/// Image stage storing images below `root`
pub async fn image_pipeline(test: &TestContext, root: &Path) -> AppImagePipeline {
    let store = FilesystemImageStore::new(root)
        .await
        .expect("Failed to create image store");

    AppImagePipeline::new(ImageFetcher::new(test.http.clone(), Arc::new(store)))
}

pub fn store_pipeline(test: &TestContext) -> StoreAppPipeline {
    StoreAppPipeline::new(test.db.clone(), sync_client(test))
}

/// Every stage in production order
pub async fn full_chain(test: &TestContext, root: &Path) -> PipelineChain {
    PipelineChain::new()
        .with_stage(FilterPipeline::new(test.db.clone()))
        .with_stage(IdentificationPipeline::new(test.db.clone()))
        .with_stage(image_pipeline(test, root).await)
        .with_stage(store_pipeline(test))
}

/// Unwraps the detail item a stage passed on
pub fn passed_detail(processed: Processed) -> AppDetailItem {
    match processed.outcome {
        Outcome::Continue(Item::Detail(detail)) => detail,
        other => panic!("Expected detail item to pass, got: {:?}", other),
    }
}
