use super::*;

/// Expected: Ok(None) for an unknown identification ID
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let result = identification_repo.get_with_app(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests an identification that has not been crawled in detail yet.
///
/// Expected: Ok(Some((identification, None)))
#[tokio::test]
async fn returns_identification_without_app() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let identification = test
        .app()
        .insert_mock_identification("com.example.app", None)
        .await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let result = identification_repo.get_with_app(identification.id).await?;

    let (found, app) = result.expect("identification should exist");
    assert_eq!(found.id, identification.id);
    assert!(app.is_none());

    Ok(())
}

/// Expected: Ok(Some((identification, Some(app)))) carrying the stored version
#[tokio::test]
async fn returns_identification_with_app() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (identification, app) = test.app().insert_mock_app("com.example.app", "2.1").await?;

    let identification_repo = AppIdentificationRepository::new(&test.db);
    let result = identification_repo.get_with_app(identification.id).await?;

    let (_, found_app) = result.expect("identification should exist");
    let found_app = found_app.expect("app should exist");
    assert_eq!(found_app.id, app.id);
    assert_eq!(found_app.last_version, "2.1");

    Ok(())
}
