//! Tests for CategoryRepository::get_or_create method.
//!
//! Categories are unique per `(name, top_type)`, the same name under another top type is a
//! separate category.

use super::*;

/// Expected: Ok with the same record for a repeated `(name, top_type)`
#[tokio::test]
async fn returns_existing_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let category_repo = CategoryRepository::new(&test.db);
    let first = category_repo.get_or_create("Tools", "soft").await?;
    let second = category_repo.get_or_create("Tools", "soft").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Tools");
    assert_eq!(second.top_type, "soft");

    Ok(())
}

/// Expected: Ok with distinct records for one name under two top types
#[tokio::test]
async fn separates_categories_by_top_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let category_repo = CategoryRepository::new(&test.db);
    let soft = category_repo.get_or_create("Tools", "soft").await?;
    let game = category_repo.get_or_create("Tools", "game").await?;
    let unknown = category_repo.get_or_create("Tools", "").await?;

    assert_ne!(soft.id, game.id);
    assert_ne!(soft.id, unknown.id);
    assert_ne!(game.id, unknown.id);

    Ok(())
}
