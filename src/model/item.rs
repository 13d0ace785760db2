//! Crawled items.
//!
//! Every unit of crawled data is either an identification item, emitted when a listing
//! page reveals an app, or a detail item, emitted after the app's detail page has been
//! scraped. Both kinds are plain serde types so a host crawler can hand them over as JSON.

use serde::{Deserialize, Serialize};

/// Item received from the host crawler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// Minimal item produced when an app is first seen on a listing.
    Identification(AppIdentificationItem),
    /// Full metadata for an app that already has an identification record.
    Detail(AppDetailItem),
}

impl Item {
    /// Package name of the app this item describes.
    pub fn apk_name(&self) -> &str {
        match self {
            Item::Identification(item) => &item.apk_name,
            Item::Detail(item) => &item.apk_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppIdentificationItem {
    pub apk_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Full app metadata extracted from a detail page.
///
/// `app_id` is the database ID of the `app_identification` row the crawler scheduled
/// the detail page for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDetailItem {
    pub app_id: i32,
    pub name: String,
    pub apk_name: String,
    pub last_version: String,
    pub rom: String,
    pub language: String,
    pub size: String,
    pub developer: String,
    pub intro: String,
    pub download_url: String,
    pub score: String,
    pub update_date: String,
    pub update_log: String,
    /// `(name, description)` pairs.
    #[serde(default)]
    pub permissions: Vec<(String, String)>,
    #[serde(default)]
    pub permissions_str: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
}

/// Remote image reference, with the stored path once the image has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: None,
        }
    }
}
