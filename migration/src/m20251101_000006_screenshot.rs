use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_app::App;

static IDX_SCREENSHOT_APP_ID_ORIGIN_URL: &str = "idx-screenshot-app_id-origin_url";
static FK_SCREENSHOT_APP_ID: &str = "fk-screenshot-app_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screenshot::Table)
                    .if_not_exists()
                    .col(pk_auto(Screenshot::Id))
                    .col(integer(Screenshot::AppId))
                    .col(string(Screenshot::OriginUrl))
                    .col(string_null(Screenshot::Image))
                    .col(timestamp(Screenshot::CreatedAt))
                    .col(timestamp(Screenshot::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCREENSHOT_APP_ID_ORIGIN_URL)
                    .table(Screenshot::Table)
                    .col(Screenshot::AppId)
                    .col(Screenshot::OriginUrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCREENSHOT_APP_ID)
                    .from_tbl(Screenshot::Table)
                    .from_col(Screenshot::AppId)
                    .to_tbl(App::Table)
                    .to_col(App::Id)
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
                    .name(FK_SCREENSHOT_APP_ID)
                    .table(Screenshot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SCREENSHOT_APP_ID_ORIGIN_URL)
                    .table(Screenshot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Screenshot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Screenshot {
    Table,
    Id,
    AppId,
    OriginUrl,
    Image,
    CreatedAt,
    UpdatedAt,
}
