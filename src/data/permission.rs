use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::data::{ignore_conflict, single_row};

pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    /// Creates a new instance of [`PermissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a permission or overwrites the description of the existing one
    pub async fn upsert(
        &self,
        name: &str,
        description: &str,
    ) -> Result<entity::permission::Model, DbErr> {
        let permission = entity::permission::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        };

        let rows = entity::prelude::Permission::insert_many([permission])
            .on_conflict(
                OnConflict::column(entity::permission::Column::Name)
                    .update_column(entity::permission::Column::Description)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        single_row(rows, "permission")
    }

    pub async fn link_app(&self, app_id: i32, permission_id: i32) -> Result<(), DbErr> {
        let link = entity::app_permission::ActiveModel {
            app_id: ActiveValue::Set(app_id),
            permission_id: ActiveValue::Set(permission_id),
        };

        ignore_conflict(
            entity::prelude::AppPermission::insert_many([link])
                .on_conflict(
                    OnConflict::columns([
                        entity::app_permission::Column::AppId,
                        entity::app_permission::Column::PermissionId,
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
