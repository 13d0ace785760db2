//! App record insertion utilities.
//!
//! Inserting an app creates its identification first when missing, so tests only name
//! the records they care about.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::app::AppFixtures,
    model::{AppIdentificationModel, AppModel},
};

impl<'a> AppFixtures<'a> {
    /// Insert a mock identification into the database.
    ///
    /// Returns the existing record if `apk_name` is already registered.
    ///
    /// # Arguments
    /// - `apk_name` - Package name of the app
    /// - `top_type` - Optional top-level category type
    ///
    /// # Returns
    /// - `Ok(AppIdentificationModel)` - The created or existing identification record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_identification(
        &self,
        apk_name: &str,
        top_type: Option<&str>,
    ) -> Result<AppIdentificationModel, TestError> {
        if let Some(existing) = entity::prelude::AppIdentification::find()
            .filter(entity::app_identification::Column::ApkName.eq(apk_name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppIdentification::insert(entity::app_identification::ActiveModel {
                apk_name: ActiveValue::Set(apk_name.to_string()),
                top_type: ActiveValue::Set(top_type.map(str::to_string)),
                is_crawled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock app detail record, creating its identification if needed.
    ///
    /// # Arguments
    /// - `apk_name` - Package name of the app
    /// - `last_version` - Version stored as already crawled
    ///
    /// # Returns
    /// - `Ok((AppIdentificationModel, AppModel))` - The identification and the created app
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_app(
        &self,
        apk_name: &str,
        last_version: &str,
    ) -> Result<(AppIdentificationModel, AppModel), TestError> {
        let identification = self.insert_mock_identification(apk_name, None).await?;
        let now = Utc::now().naive_utc();

        let app = entity::prelude::App::insert(entity::app::ActiveModel {
            app_identification_id: ActiveValue::Set(identification.id),
            name: ActiveValue::Set("Stored App".to_string()),
            apk_name: ActiveValue::Set(apk_name.to_string()),
            last_version: ActiveValue::Set(last_version.to_string()),
            rom: ActiveValue::Set(String::new()),
            language: ActiveValue::Set(String::new()),
            size: ActiveValue::Set(String::new()),
            developer: ActiveValue::Set(String::new()),
            intro: ActiveValue::Set(String::new()),
            download_url: ActiveValue::Set(String::new()),
            score: ActiveValue::Set(String::new()),
            update_date: ActiveValue::Set(String::new()),
            update_log: ActiveValue::Set(String::new()),
            logo: ActiveValue::Set(None),
            logo_origin_url: ActiveValue::Set(None),
            permissions_str: ActiveValue::Set(String::new()),
            category_id: ActiveValue::Set(None),
            is_crawled: ActiveValue::Set(true),
            last_crawl_time: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        Ok((identification, app))
    }
}
