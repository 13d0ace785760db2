//! Tests for ScreenshotRepository::upsert method.
//!
//! Screenshots are unique per `(app_id, origin_url)`. A re-crawl whose download failed must
//! keep the stored image path.

use super::*;

/// Expected: Ok with one row per origin URL and the stored image path kept
#[tokio::test]
async fn keeps_image_when_download_failed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (_, app) = test.app().insert_mock_app("com.example.app", "1.0.0").await?;

    let screenshot_repo = ScreenshotRepository::new(&test.db);
    let first = screenshot_repo
        .upsert(
            app.id,
            "http://img.example.com/s0.png",
            Some("full/s0.jpg".to_string()),
        )
        .await?;
    let second = screenshot_repo
        .upsert(app.id, "http://img.example.com/s0.png", None)
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.image.as_deref(), Some("full/s0.jpg"));

    let screenshots = screenshot_repo.get_many_by_app_id(app.id).await?;
    assert_eq!(screenshots.len(), 1);

    Ok(())
}

/// Expected: Ok with the newer image path replacing the stored one
#[tokio::test]
async fn replaces_image_on_successful_download() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_app_tables().build().await?;
    let (_, app) = test.app().insert_mock_app("com.example.app", "1.0.0").await?;

    let screenshot_repo = ScreenshotRepository::new(&test.db);
    screenshot_repo
        .upsert(app.id, "http://img.example.com/s0.png", None)
        .await?;
    let updated = screenshot_repo
        .upsert(
            app.id,
            "http://img.example.com/s0.png",
            Some("full/s0.jpg".to_string()),
        )
        .await?;

    assert_eq!(updated.image.as_deref(), Some("full/s0.jpg"));

    Ok(())
}
