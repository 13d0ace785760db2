use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::app_identification::AppIdentificationRepository,
    error::{item::ItemError, Error},
    model::{
        item::{AppDetailItem, Item},
        outcome::{CrawlSuccess, CrawlSuccessReason, DropReason, Processed},
    },
    pipeline::Pipeline,
};

/// Drops detail items whose crawled version is already stored.
///
/// Dropping reports a [`CrawlSuccessReason::VersionAlreadyNewest`] crawl success so the
/// crawler stops rescheduling the app. An empty crawled version never matches.
pub struct FilterPipeline {
    db: DatabaseConnection,
}

impl FilterPipeline {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn check_version(&self, detail: &AppDetailItem) -> Result<Option<Processed>, Error> {
        let (identification, app) = AppIdentificationRepository::new(&self.db)
            .get_with_app(detail.app_id)
            .await?
            .ok_or(ItemError::AppNotFound(detail.app_id))?;

        let Some(app) = app else {
            return Ok(None);
        };

        if detail.last_version.is_empty() || detail.last_version != app.last_version {
            return Ok(None);
        }

        let crawl_success = CrawlSuccess {
            apk_name: identification.apk_name.clone(),
            reason: CrawlSuccessReason::VersionAlreadyNewest,
        };
        let reason = DropReason::VersionAlreadyNewest {
            apk_name: identification.apk_name,
            version: app.last_version,
        };

        Ok(Some(
            Processed::dropped(reason).with_crawl_success(Some(crawl_success)),
        ))
    }
}

#[async_trait]
impl Pipeline for FilterPipeline {
    fn name(&self) -> &str {
        "FilterPipeline"
    }

    async fn process_item(&self, item: Item) -> Result<Processed, Error> {
        if let Item::Detail(detail) = &item {
            if let Some(dropped) = self.check_version(detail).await? {
                return Ok(dropped);
            }
        }

        Ok(Processed::pass(item))
    }
}
