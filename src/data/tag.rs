use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::data::{ignore_conflict, single_row};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_or_create(&self, name: &str) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        let rows = entity::prelude::Tag::insert_many([tag])
            .on_conflict(
                OnConflict::column(entity::tag::Column::Name)
                    .update_column(entity::tag::Column::Name)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        single_row(rows, "tag")
    }

    pub async fn link_app(&self, app_id: i32, tag_id: i32) -> Result<(), DbErr> {
        let link = entity::app_tag::ActiveModel {
            app_id: ActiveValue::Set(app_id),
            tag_id: ActiveValue::Set(tag_id),
        };

        ignore_conflict(
            entity::prelude::AppTag::insert_many([link])
                .on_conflict(
                    OnConflict::columns([
                        entity::app_tag::Column::AppId,
                        entity::app_tag::Column::TagId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await,
        )?;

        Ok(())
    }
}
