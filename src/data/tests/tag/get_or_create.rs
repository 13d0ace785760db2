use super::*;

/// Expected: Ok with the same record for a repeated tag name
#[tokio::test]
async fn returns_existing_tag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await?;

    let tag_repo = TagRepository::new(&test.db);
    let first = tag_repo.get_or_create("puzzle").await?;
    let second = tag_repo.get_or_create("puzzle").await?;
    let other = tag_repo.get_or_create("casual").await?;

    assert_eq!(first.id, second.id);
    assert_ne!(first.id, other.id);

    Ok(())
}
