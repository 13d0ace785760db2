use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::data::{ignore_conflict, single_row};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the category for `(name, top_type)`, creating it if needed
    pub async fn get_or_create(
        &self,
        name: &str,
        top_type: &str,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            top_type: ActiveValue::Set(top_type.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        // Rewriting the key column on conflict makes RETURNING yield the existing row
        let rows = entity::prelude::Category::insert_many([category])
            .on_conflict(
                OnConflict::columns([
                    entity::category::Column::Name,
                    entity::category::Column::TopType,
                ])
                .update_column(entity::category::Column::Name)
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        single_row(rows, "category")
    }

    /// Links a tag to a category, linking an already linked pair is a no-op
    pub async fn link_tag(&self, category_id: i32, tag_id: i32) -> Result<(), DbErr> {
        let link = entity::category_tag::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            tag_id: ActiveValue::Set(tag_id),
        };

        ignore_conflict(
            entity::prelude::CategoryTag::insert_many([link])
                .on_conflict(
                    OnConflict::columns([
                        entity::category_tag::Column::CategoryId,
                        entity::category_tag::Column::TagId,
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
