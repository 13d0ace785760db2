use super::*;

/// Expected: Ok with `is_crawled` set on the stored identification
#[tokio::test]
async fn marks_identification_crawled() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AppIdentification)
        .build()
        .await?;
    let identification = test
        .app()
        .insert_mock_identification("com.example.app", None)
        .await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let result = identification_repo.mark_crawled(identification.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = identification_repo
        .get_by_id(identification.id)
        .await?
        .expect("identification should exist");
    assert!(stored.is_crawled);

    Ok(())
}
