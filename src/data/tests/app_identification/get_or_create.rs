//! Tests for AppIdentificationRepository::get_or_create method.

use sea_orm::EntityTrait;

use super::*;

/// Tests creating an identification for an unseen apk name.
///
/// Expected: Ok with the new record and `created == true`
#[tokio::test]
async fn creates_new_identification() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppIdentification)
        .build()
        .await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let result = identification_repo
        .get_or_create("com.example.app", Some("game".to_string()))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let (identification, created) = result.unwrap();
    assert!(created);
    assert_eq!(identification.apk_name, "com.example.app");
    assert_eq!(identification.top_type.as_deref(), Some("game"));
    assert!(!identification.is_crawled);

    Ok(())
}

/// Tests that a known apk name returns the stored record untouched.
///
/// Verifies the second call neither inserts a row nor overwrites the stored top type.
///
/// Expected: Ok with the existing record and `created == false`
#[tokio::test]
async fn returns_existing_identification() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppIdentification)
        .with_mock_identification("com.example.app", Some("game"))
        .build()
        .await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let (identification, created) = identification_repo
        .get_or_create("com.example.app", Some("soft".to_string()))
        .await?;

    assert!(!created);
    assert_eq!(identification.top_type.as_deref(), Some("game"));

    let count = entity::prelude::AppIdentification::find()
        .all(&test.db)
        .await?
        .len();
    assert_eq!(count, 1);

    Ok(())
}
