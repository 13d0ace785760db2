use sea_orm::ModelTrait;

use super::*;

/// Expected: Ok with the tag reachable from the app exactly once
#[tokio::test]
async fn links_tag_to_app_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (_, app) = test.app().insert_mock_app("com.example.app", "1.0.0").await?;

    let tag_repo = TagRepository::new(&test.db);
    let tag = tag_repo.get_or_create("puzzle").await?;
    tag_repo.link_app(app.id, tag.id).await?;
    tag_repo.link_app(app.id, tag.id).await?;

    let tags = app.find_related(entity::prelude::Tag).all(&test.db).await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, tag.id);

    Ok(())
}
