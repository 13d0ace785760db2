//! Tests for IdentificationPipeline
//!
//! These tests verify the stage registers new apps, drops known ones, refreshes their top
//! type and registers crawled categories under it.

use apphub::{
    data::{app_identification::AppIdentificationRepository, category::CategoryRepository},
    model::outcome::{DropReason, Outcome},
    pipeline::{identification::IdentificationPipeline, Pipeline},
};
use apphub_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::util::factory::{detail_item, identification_item};

/// Tests registering an app seen for the first time.
///
/// Expected: Continue with the identification and its category stored
#[tokio::test]
async fn registers_new_app() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let stage = IdentificationPipeline::new(test.db.clone());
    let item = identification_item("com.example.app", Some("game"), Some("Puzzle"));
    let processed = stage.process_item(item.clone()).await.unwrap();

    assert_eq!(processed.outcome, Outcome::Continue(item));
    assert!(processed.crawl_success.is_none());

    let identification = AppIdentificationRepository::new(&test.db)
        .get_by_apk_name("com.example.app")
        .await?
        .expect("identification should exist");
    assert_eq!(identification.top_type.as_deref(), Some("game"));

    let categories = entity::prelude::Category::find()
        .filter(entity::category::Column::Name.eq("Puzzle"))
        .all(&test.db)
        .await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].top_type, "game");

    Ok(())
}

/// Tests dropping an app that is already registered.
///
/// Verifies the stored top type is refreshed from the item before the drop.
///
/// Expected: Drop(DuplicateApk) with top_type updated
#[tokio::test]
async fn drops_known_app_and_updates_top_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_identification("com.example.app", Some("soft"))
        .build()
        .await?;

    let stage = IdentificationPipeline::new(test.db.clone());
    let item = identification_item("com.example.app", Some("game"), None);
    let processed = stage.process_item(item).await.unwrap();

    assert_eq!(
        processed.outcome,
        Outcome::Drop(DropReason::DuplicateApk {
            apk_name: "com.example.app".to_string()
        })
    );

    let identification = AppIdentificationRepository::new(&test.db)
        .get_by_apk_name("com.example.app")
        .await?
        .expect("identification should exist");
    assert_eq!(identification.top_type.as_deref(), Some("game"));

    let count = entity::prelude::AppIdentification::find()
        .all(&test.db)
        .await?
        .len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a known app whose item carries a category but no top type.
///
/// Expected: Drop with the category registered under the stored top type
#[tokio::test]
async fn registers_category_under_stored_top_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_identification("com.example.app", Some("soft"))
        .build()
        .await?;

    let stage = IdentificationPipeline::new(test.db.clone());
    let item = identification_item("com.example.app", None, Some("Tools"));
    let processed = stage.process_item(item).await.unwrap();

    assert!(matches!(processed.outcome, Outcome::Drop(_)));

    let categories = entity::prelude::Category::find().all(&test.db).await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Tools");
    assert_eq!(categories[0].top_type, "soft");

    let identification = AppIdentificationRepository::new(&test.db)
        .get_by_apk_name("com.example.app")
        .await?
        .expect("identification should exist");
    assert_eq!(identification.top_type.as_deref(), Some("soft"));

    Ok(())
}

/// Tests processing the same new app twice.
///
/// Expected: Continue then Drop, with one identification and one category
#[tokio::test]
async fn second_sighting_is_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let stage = IdentificationPipeline::new(test.db.clone());
    let item = identification_item("com.example.app", Some("game"), Some("Puzzle"));

    let first = stage.process_item(item.clone()).await.unwrap();
    let second = stage.process_item(item).await.unwrap();

    assert!(matches!(first.outcome, Outcome::Continue(_)));
    assert!(matches!(second.outcome, Outcome::Drop(_)));

    let category = CategoryRepository::new(&test.db)
        .get_or_create("Puzzle", "game")
        .await?;
    let categories = entity::prelude::Category::find().all(&test.db).await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, category.id);

    Ok(())
}

/// Expected: detail items pass unchanged without touching the database
#[tokio::test]
async fn ignores_detail_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let stage = IdentificationPipeline::new(test.db.clone());
    let item = apphub::model::item::Item::Detail(detail_item(1, "com.example.app", "1.0.0"));
    let processed = stage.process_item(item.clone()).await.unwrap();

    assert_eq!(processed.outcome, Outcome::Continue(item));

    let count = entity::prelude::AppIdentification::find()
        .all(&test.db)
        .await?
        .len();
    assert_eq!(count, 0);

    Ok(())
}
