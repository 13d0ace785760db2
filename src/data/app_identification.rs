use chrono::Utc;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::data::ignore_conflict;

pub struct AppIdentificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppIdentificationRepository<'a, C> {
    /// Creates a new instance of [`AppIdentificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the identification for `apk_name` or inserts it
    ///
    /// # Arguments
    /// - `apk_name`: Package name, unique across all apps
    /// - `top_type`: Top-level category type stored only when the row is created
    ///
    /// # Returns
    /// The identification and `true` if this call created it
    pub async fn get_or_create(
        &self,
        apk_name: &str,
        top_type: Option<String>,
    ) -> Result<(entity::app_identification::Model, bool), DbErr> {
        let now = Utc::now().naive_utc();
        let identification = entity::app_identification::ActiveModel {
            apk_name: ActiveValue::Set(apk_name.to_string()),
            top_type: ActiveValue::Set(top_type),
            is_crawled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let inserted = ignore_conflict(
            entity::prelude::AppIdentification::insert_many([identification])
                .on_conflict(
                    OnConflict::column(entity::app_identification::Column::ApkName)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await,
        )?;

        if let Some(created) = inserted.into_iter().next() {
            return Ok((created, true));
        }

        let existing = self.get_by_apk_name(apk_name).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("app identification {} vanished", apk_name))
        })?;

        Ok((existing, false))
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::app_identification::Model>, DbErr> {
        entity::prelude::AppIdentification::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_apk_name(
        &self,
        apk_name: &str,
    ) -> Result<Option<entity::app_identification::Model>, DbErr> {
        entity::prelude::AppIdentification::find()
            .filter(entity::app_identification::Column::ApkName.eq(apk_name))
            .one(self.db)
            .await
    }

    /// Gets an identification together with its app detail record, if one was persisted yet
    pub async fn get_with_app(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::app_identification::Model,
            Option<entity::app::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AppIdentification::find_by_id(id)
            .find_also_related(entity::app::Entity)
            .one(self.db)
            .await
    }

    pub async fn update_top_type(
        &self,
        identification: entity::app_identification::Model,
        top_type: String,
    ) -> Result<entity::app_identification::Model, DbErr> {
        let mut identification_am = identification.into_active_model();
        identification_am.top_type = ActiveValue::Set(Some(top_type));
        identification_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        identification_am.update(self.db).await
    }

    /// Flags the identification as having a persisted detail crawl
    pub async fn mark_crawled(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AppIdentification::update_many()
            .col_expr(
                entity::app_identification::Column::IsCrawled,
                Expr::value(true),
            )
            .col_expr(
                entity::app_identification::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::app_identification::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
