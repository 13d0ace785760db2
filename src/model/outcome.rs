//! Stage outcomes.
//!
//! A stage either passes the item on or drops it. Dropping is an expected control-flow
//! result, not an error. Stages that complete a crawl also return a [`CrawlSuccess`]
//! event to their caller instead of broadcasting a signal.

use std::fmt;

use crate::model::item::Item;

/// Decision a stage made about an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Hand the item to the next stage.
    Continue(Item),
    /// Stop processing the item.
    Drop(DropReason),
}

/// Why an item was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The crawled version matches the stored one, nothing to update.
    VersionAlreadyNewest { apk_name: String, version: String },
    /// The app was already known when its identification item arrived.
    DuplicateApk { apk_name: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::VersionAlreadyNewest { apk_name, version } => {
                write!(f, "{}({}) version is newest", apk_name, version)
            }
            DropReason::DuplicateApk { apk_name } => write!(f, "Duplicate apk {}", apk_name),
        }
    }
}

/// Reported once an app needs no further crawling for now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSuccess {
    pub apk_name: String,
    pub reason: CrawlSuccessReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlSuccessReason {
    /// Stored version is already the newest, no update needed.
    VersionAlreadyNewest,
    /// A new version was crawled, persisted and accepted by the sync API.
    NewVersionSynced,
}

impl fmt::Display for CrawlSuccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlSuccessReason::VersionAlreadyNewest => {
                write!(f, "version already newest, no update needed")
            }
            CrawlSuccessReason::NewVersionSynced => write!(f, "new version crawled and synced"),
        }
    }
}

/// Result of one stage processing one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub outcome: Outcome,
    pub crawl_success: Option<CrawlSuccess>,
}

impl Processed {
    /// Pass the item on unchanged or modified.
    pub fn pass(item: Item) -> Self {
        Self {
            outcome: Outcome::Continue(item),
            crawl_success: None,
        }
    }

    /// Drop the item.
    pub fn dropped(reason: DropReason) -> Self {
        Self {
            outcome: Outcome::Drop(reason),
            crawl_success: None,
        }
    }

    /// Attach a crawl success event.
    pub fn with_crawl_success(mut self, crawl_success: Option<CrawlSuccess>) -> Self {
        self.crawl_success = crawl_success;
        self
    }
}
