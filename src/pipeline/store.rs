use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{app::AppRepository, app_identification::AppIdentificationRepository},
    error::{item::ItemError, Error},
    model::{
        item::{AppDetailItem, Item},
        outcome::{CrawlSuccess, CrawlSuccessReason, Processed},
    },
    pipeline::Pipeline,
    service::{relation::AppRelationService, sync::SyncClient},
};

/// Persists detail items and hands them to the sync API.
///
/// The item always passes on once persisted. Only an accepted sync reports a
/// [`CrawlSuccessReason::NewVersionSynced`] crawl success. A sync API that cannot be
/// reached is logged and otherwise ignored.
pub struct StoreAppPipeline {
    db: DatabaseConnection,
    sync: SyncClient,
}

impl StoreAppPipeline {
    pub fn new(db: DatabaseConnection, sync: SyncClient) -> Self {
        Self { db, sync }
    }

    async fn store(&self, detail: AppDetailItem) -> Result<Processed, Error> {
        let txn = self.db.begin().await?;
        let identification_repo = AppIdentificationRepository::new(&txn);

        let identification = identification_repo
            .get_by_id(detail.app_id)
            .await?
            .ok_or(ItemError::AppNotFound(detail.app_id))?;

        // Crawled flags only become visible together with the relations
        let app = AppRepository::new(&txn)
            .upsert_details(identification.id, &detail)
            .await?;
        identification_repo.mark_crawled(identification.id).await?;

        AppRelationService::new(&txn)
            .update_app_related(&identification, app, &detail)
            .await?;

        txn.commit().await?;

        tracing::info!("update ok {}", identification.apk_name);

        let crawl_success = self.sync_app(&identification.apk_name).await;

        Ok(Processed::pass(Item::Detail(detail)).with_crawl_success(crawl_success))
    }

    async fn sync_app(&self, apk_name: &str) -> Option<CrawlSuccess> {
        match self.sync.notify(apk_name).await {
            Ok(response) if response.success => Some(CrawlSuccess {
                apk_name: apk_name.to_string(),
                reason: CrawlSuccessReason::NewVersionSynced,
            }),
            Ok(response) => {
                tracing::warn!(
                    "Sync API did not accept {} (status {})",
                    apk_name,
                    response.status
                );
                None
            }
            Err(e) => {
                tracing::error!("sync data error for {}: {}", apk_name, e);
                None
            }
        }
    }
}

#[async_trait]
impl Pipeline for StoreAppPipeline {
    fn name(&self) -> &str {
        "StoreAppPipeline"
    }

    async fn process_item(&self, item: Item) -> Result<Processed, Error> {
        match item {
            Item::Detail(detail) => self.store(detail).await,
            other => Ok(Processed::pass(other)),
        }
    }
}
