//! Item factories for pipeline tests.

use apphub::model::item::{AppDetailItem, AppIdentificationItem, ImageRef, Item};

pub fn identification_item(
    apk_name: &str,
    top_type: Option<&str>,
    category: Option<&str>,
) -> Item {
    Item::Identification(AppIdentificationItem {
        apk_name: apk_name.to_string(),
        top_type: top_type.map(str::to_string),
        category: category.map(str::to_string),
    })
}

/// Creates a detail item with two permissions, two tags and no images
pub fn detail_item(app_id: i32, apk_name: &str, last_version: &str) -> AppDetailItem {
    AppDetailItem {
        app_id,
        name: "Example App".to_string(),
        apk_name: apk_name.to_string(),
        last_version: last_version.to_string(),
        rom: "Android 8.0+".to_string(),
        language: "English".to_string(),
        size: "12.3MB".to_string(),
        developer: "Example Studio".to_string(),
        intro: "An example app.".to_string(),
        download_url: format!("http://dl.example.com/{}.apk", apk_name),
        score: "8.5".to_string(),
        update_date: "2025-11-01".to_string(),
        update_log: "Bug fixes.".to_string(),
        permissions: vec![
            (
                "android.permission.INTERNET".to_string(),
                "Full network access".to_string(),
            ),
            (
                "android.permission.CAMERA".to_string(),
                "Take pictures and videos".to_string(),
            ),
        ],
        permissions_str: "Full network access, Take pictures and videos".to_string(),
        category: "Tools".to_string(),
        tags: vec!["utility".to_string(), "offline".to_string()],
        screenshots: Vec::new(),
        logo: None,
    }
}

/// Adds a logo and screenshots served by the mock server at `base_url`
pub fn with_images(
    mut detail: AppDetailItem,
    base_url: &str,
    logo_path: &str,
    screenshot_paths: &[&str],
) -> AppDetailItem {
    detail.logo = Some(ImageRef::new(format!("{}{}", base_url, logo_path)));
    detail.screenshots = screenshot_paths
        .iter()
        .map(|path| ImageRef::new(format!("{}{}", base_url, path)))
        .collect();
    detail
}
