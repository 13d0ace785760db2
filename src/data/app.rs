use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

use crate::{data::single_row, model::item::AppDetailItem};

pub struct AppRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppRepository<'a, C> {
    /// Creates a new instance of [`AppRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes the crawled detail fields for an identification, creating the app record on
    /// its first crawl
    ///
    /// Marks the record as crawled and stamps the crawl time. A missing logo or one whose
    /// download failed keeps the previously stored logo path and origin URL as a pair.
    ///
    /// # Arguments
    /// - `app_identification_id`: ID of the identification the detail record belongs to
    /// - `detail`: Crawled detail item with fetched image paths applied
    pub async fn upsert_details(
        &self,
        app_identification_id: i32,
        detail: &AppDetailItem,
    ) -> Result<entity::app::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let logo_path = detail.logo.as_ref().and_then(|logo| logo.path.clone());

        let mut update_columns = vec![
            entity::app::Column::Name,
            entity::app::Column::ApkName,
            entity::app::Column::LastVersion,
            entity::app::Column::Rom,
            entity::app::Column::Language,
            entity::app::Column::Size,
            entity::app::Column::Developer,
            entity::app::Column::Intro,
            entity::app::Column::DownloadUrl,
            entity::app::Column::Score,
            entity::app::Column::UpdateDate,
            entity::app::Column::UpdateLog,
            entity::app::Column::IsCrawled,
            entity::app::Column::LastCrawlTime,
            entity::app::Column::UpdatedAt,
        ];
        if logo_path.is_some() {
            update_columns.push(entity::app::Column::Logo);
            update_columns.push(entity::app::Column::LogoOriginUrl);
        }

        let app = entity::app::ActiveModel {
            app_identification_id: ActiveValue::Set(app_identification_id),
            name: ActiveValue::Set(detail.name.clone()),
            apk_name: ActiveValue::Set(detail.apk_name.clone()),
            last_version: ActiveValue::Set(detail.last_version.clone()),
            rom: ActiveValue::Set(detail.rom.clone()),
            language: ActiveValue::Set(detail.language.clone()),
            size: ActiveValue::Set(detail.size.clone()),
            developer: ActiveValue::Set(detail.developer.clone()),
            intro: ActiveValue::Set(detail.intro.clone()),
            download_url: ActiveValue::Set(detail.download_url.clone()),
            score: ActiveValue::Set(detail.score.clone()),
            update_date: ActiveValue::Set(detail.update_date.clone()),
            update_log: ActiveValue::Set(detail.update_log.clone()),
            logo: ActiveValue::Set(logo_path),
            logo_origin_url: ActiveValue::Set(detail.logo.as_ref().map(|logo| logo.url.clone())),
            permissions_str: ActiveValue::Set(String::new()),
            category_id: ActiveValue::Set(None),
            is_crawled: ActiveValue::Set(true),
            last_crawl_time: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let rows = entity::prelude::App::insert_many([app])
            .on_conflict(
                OnConflict::column(entity::app::Column::AppIdentificationId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        single_row(rows, "app")
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::app::Model>, DbErr> {
        entity::prelude::App::find_by_id(id).one(self.db).await
    }

    /// Sets the rendered permission summary and category of an app
    pub async fn update_relations(
        &self,
        app: entity::app::Model,
        permissions_str: String,
        category_id: i32,
    ) -> Result<entity::app::Model, DbErr> {
        let mut app_am = app.into_active_model();
        app_am.permissions_str = ActiveValue::Set(permissions_str);
        app_am.category_id = ActiveValue::Set(Some(category_id));
        app_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        app_am.update(self.db).await
    }
}
