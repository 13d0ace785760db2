use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::data::single_row;

pub struct ScreenshotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScreenshotRepository<'a, C> {
    /// Creates a new instance of [`ScreenshotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates the screenshot of `app_id` taken from `origin_url`
    ///
    /// # Arguments
    /// - `app_id`: ID of the owning app record
    /// - `origin_url`: Source URL, unique per app
    /// - `image`: Stored image path, `None` when the download failed. An existing stored
    ///   path is never cleared by a failed re-download.
    pub async fn upsert(
        &self,
        app_id: i32,
        origin_url: &str,
        image: Option<String>,
    ) -> Result<entity::screenshot::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut update_columns = vec![entity::screenshot::Column::UpdatedAt];
        if image.is_some() {
            update_columns.push(entity::screenshot::Column::Image);
        }

        let screenshot = entity::screenshot::ActiveModel {
            app_id: ActiveValue::Set(app_id),
            origin_url: ActiveValue::Set(origin_url.to_string()),
            image: ActiveValue::Set(image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let rows = entity::prelude::Screenshot::insert_many([screenshot])
            .on_conflict(
                OnConflict::columns([
                    entity::screenshot::Column::AppId,
                    entity::screenshot::Column::OriginUrl,
                ])
                .update_columns(update_columns)
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        single_row(rows, "screenshot")
    }

    pub async fn get_many_by_app_id(
        &self,
        app_id: i32,
    ) -> Result<Vec<entity::screenshot::Model>, DbErr> {
        entity::prelude::Screenshot::find()
            .filter(entity::screenshot::Column::AppId.eq(app_id))
            .order_by_asc(entity::screenshot::Column::Id)
            .all(self.db)
            .await
    }
}
