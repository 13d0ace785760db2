use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::{app_identification::AppIdentificationRepository, category::CategoryRepository},
    error::Error,
    model::{
        item::{AppIdentificationItem, Item},
        outcome::{DropReason, Processed},
    },
    pipeline::Pipeline,
};

/// Registers apps discovered on listing pages.
///
/// A newly seen apk name is stored and the item passes on. An apk name that is already
/// known has its `top_type` refreshed and is dropped as a duplicate. A crawled category is
/// registered under the app's top type in both cases.
pub struct IdentificationPipeline {
    db: DatabaseConnection,
}

impl IdentificationPipeline {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn identify(&self, item: AppIdentificationItem) -> Result<Processed, Error> {
        let identification_repo = AppIdentificationRepository::new(&self.db);

        let (mut identification, created) = identification_repo
            .get_or_create(&item.apk_name, item.top_type.clone())
            .await?;

        if let Some(top_type) = &item.top_type {
            if identification.top_type.as_ref() != Some(top_type) {
                identification = identification_repo
                    .update_top_type(identification, top_type.clone())
                    .await?;
            }
        }

        if let Some(category) = &item.category {
            let top_type = identification.top_type.as_deref().unwrap_or_default();
            CategoryRepository::new(&self.db)
                .get_or_create(category, top_type)
                .await?;
        }

        if created {
            tracing::info!("Get new apk {}", identification.apk_name);

            return Ok(Processed::pass(Item::Identification(item)));
        }

        Ok(Processed::dropped(DropReason::DuplicateApk {
            apk_name: identification.apk_name,
        }))
    }
}

#[async_trait]
impl Pipeline for IdentificationPipeline {
    fn name(&self) -> &str {
        "IdentificationPipeline"
    }

    async fn process_item(&self, item: Item) -> Result<Processed, Error> {
        match item {
            Item::Identification(identification) => self.identify(identification).await,
            other => Ok(Processed::pass(other)),
        }
    }
}
