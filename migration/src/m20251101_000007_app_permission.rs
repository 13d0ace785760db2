use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000005_app::App, m20251101_000003_permission::Permission};

static FK_APP_PERMISSION_APP_ID: &str = "fk-app_permission-app_id";
static FK_APP_PERMISSION_PERMISSION_ID: &str = "fk-app_permission-permission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppPermission::Table)
                    .if_not_exists()
                    .col(integer(AppPermission::AppId))
                    .col(integer(AppPermission::PermissionId))
                    .primary_key(Index::create().col(AppPermission::AppId).col(AppPermission::PermissionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_PERMISSION_APP_ID)
                    .from_tbl(AppPermission::Table)
                    .from_col(AppPermission::AppId)
                    .to_tbl(App::Table)
                    .to_col(App::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_PERMISSION_PERMISSION_ID)
                    .from_tbl(AppPermission::Table)
                    .from_col(AppPermission::PermissionId)
                    .to_tbl(Permission::Table)
                    .to_col(Permission::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_PERMISSION_PERMISSION_ID)
                    .table(AppPermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_PERMISSION_APP_ID)
                    .table(AppPermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppPermission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AppPermission {
    Table,
    AppId,
    PermissionId,
}
