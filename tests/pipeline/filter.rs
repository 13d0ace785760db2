//! Tests for FilterPipeline
//!
//! These tests verify detail items are dropped only when the crawled version is non-empty
//! and equal to the stored one, and that such drops report a crawl success.

use apphub::{
    error::{item::ItemError, Error},
    model::{
        item::Item,
        outcome::{CrawlSuccessReason, DropReason, Outcome},
    },
    pipeline::{filter::FilterPipeline, Pipeline},
};
use apphub_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::factory::{detail_item, identification_item};

/// Tests dropping a detail item whose version is already stored.
///
/// Expected: Drop(VersionAlreadyNewest) with a VersionAlreadyNewest crawl success
#[tokio::test]
async fn drops_stored_version() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (identification, _) = test.app().insert_mock_app("com.example.app", "1.0.0").await?;

    let filter = FilterPipeline::new(test.db.clone());
    let item = Item::Detail(detail_item(identification.id, "com.example.app", "1.0.0"));
    let processed = filter.process_item(item).await.unwrap();

    assert_eq!(
        processed.outcome,
        Outcome::Drop(DropReason::VersionAlreadyNewest {
            apk_name: "com.example.app".to_string(),
            version: "1.0.0".to_string(),
        })
    );
    let crawl_success = processed.crawl_success.expect("crawl success expected");
    assert_eq!(crawl_success.apk_name, "com.example.app");
    assert_eq!(crawl_success.reason, CrawlSuccessReason::VersionAlreadyNewest);

    Ok(())
}

/// Expected: Continue with no crawl success for a newer crawled version
#[tokio::test]
async fn passes_new_version() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (identification, _) = test.app().insert_mock_app("com.example.app", "1.0.0").await?;

    let filter = FilterPipeline::new(test.db.clone());
    let item = Item::Detail(detail_item(identification.id, "com.example.app", "1.1.0"));
    let processed = filter.process_item(item.clone()).await.unwrap();

    assert_eq!(processed.outcome, Outcome::Continue(item));
    assert!(processed.crawl_success.is_none());

    Ok(())
}

/// Tests that an empty version never counts as already stored.
///
/// Expected: Continue even though the stored version is empty too
#[tokio::test]
async fn passes_empty_version() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (identification, _) = test.app().insert_mock_app("com.example.app", "").await?;

    let filter = FilterPipeline::new(test.db.clone());
    let item = Item::Detail(detail_item(identification.id, "com.example.app", ""));
    let processed = filter.process_item(item).await.unwrap();

    assert!(matches!(processed.outcome, Outcome::Continue(_)));
    assert!(processed.crawl_success.is_none());

    Ok(())
}

/// Expected: Continue for an app that has never been crawled in detail
#[tokio::test]
async fn passes_first_detail_crawl() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_identification("com.example.app", Some("soft"))
        .build()
        .await?;
    let identification = entity::prelude::AppIdentification::find()
        .one(&test.db)
        .await?
        .expect("identification should exist");

    let filter = FilterPipeline::new(test.db.clone());
    let item = Item::Detail(detail_item(identification.id, "com.example.app", "1.0.0"));
    let processed = filter.process_item(item).await.unwrap();

    assert!(matches!(processed.outcome, Outcome::Continue(_)));

    Ok(())
}

/// Expected: Err(ItemError::AppNotFound) when the identification does not exist
#[tokio::test]
async fn fails_for_unknown_identification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let filter = FilterPipeline::new(test.db.clone());
    let item = Item::Detail(detail_item(999, "com.example.app", "1.0.0"));
    let result = filter.process_item(item).await;

    assert!(
        matches!(result, Err(Error::ItemError(ItemError::AppNotFound(999)))),
        "Expected AppNotFound, got: {:?}",
        result
    );

    Ok(())
}

/// Expected: identification items pass unchanged
#[tokio::test]
async fn ignores_identification_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let filter = FilterPipeline::new(test.db.clone());
    let item = identification_item("com.example.app", None, None);
    let processed = filter.process_item(item.clone()).await.unwrap();

    assert_eq!(processed.outcome, Outcome::Continue(item));

    Ok(())
}
