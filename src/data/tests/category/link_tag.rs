use sea_orm::{EntityTrait, ModelTrait};

use super::*;

/// Tests that linking an already linked tag is a no-op.
///
/// Expected: Ok for both calls with a single link row
#[tokio::test]
async fn links_tag_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let category = CategoryRepository::new(&test.db)
        .get_or_create("Tools", "soft")
        .await?;
    let tag = TagRepository::new(&test.db).get_or_create("utility").await?;

    let category_repo = CategoryRepository::new(&test.db);
    let first = category_repo.link_tag(category.id, tag.id).await;
    let second = category_repo.link_tag(category.id, tag.id).await;

    assert!(first.is_ok(), "Error: {:?}", first);
    assert!(second.is_ok(), "Error: {:?}", second);

    let links = entity::prelude::CategoryTag::find().all(&test.db).await?;
    assert_eq!(links.len(), 1);

    let tags = category.find_related(entity::prelude::Tag).all(&test.db).await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "utility");

    Ok(())
}
