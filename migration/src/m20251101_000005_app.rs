use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_app_identification::AppIdentification,
    m20251101_000002_category::Category,
};

static IDX_APP_CATEGORY_ID: &str = "idx-app-category_id";
static FK_APP_APP_IDENTIFICATION_ID: &str = "fk-app-app_identification_id";
static FK_APP_CATEGORY_ID: &str = "fk-app-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(App::Table)
                    .if_not_exists()
                    .col(pk_auto(App::Id))
                    .col(integer_uniq(App::AppIdentificationId))
                    .col(string(App::Name))
                    .col(string(App::ApkName))
                    .col(string(App::LastVersion))
                    .col(string(App::Rom))
                    .col(string(App::Language))
                    .col(string(App::Size))
                    .col(string(App::Developer))
                    .col(text(App::Intro))
                    .col(string(App::DownloadUrl))
                    .col(string(App::Score))
                    .col(string(App::UpdateDate))
                    .col(text(App::UpdateLog))
                    .col(string_null(App::Logo))
                    .col(string_null(App::LogoOriginUrl))
                    .col(text(App::PermissionsStr))
                    .col(integer_null(App::CategoryId))
                    .col(boolean(App::IsCrawled).default(false))
                    .col(timestamp_null(App::LastCrawlTime))
                    .col(timestamp(App::CreatedAt))
                    .col(timestamp(App::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_CATEGORY_ID)
                    .table(App::Table)
                    .col(App::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_APP_IDENTIFICATION_ID)
                    .from_tbl(App::Table)
                    .from_col(App::AppIdentificationId)
                    .to_tbl(AppIdentification::Table)
                    .to_col(AppIdentification::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_CATEGORY_ID)
                    .from_tbl(App::Table)
                    .from_col(App::CategoryId)
                    .to_tbl(Category::Table)
                    .to_col(Category::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_CATEGORY_ID)
                    .table(App::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_APP_IDENTIFICATION_ID)
                    .table(App::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_CATEGORY_ID)
                    .table(App::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(App::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum App {
    Table,
    Id,
    AppIdentificationId,
    Name,
    ApkName,
    LastVersion,
    Rom,
    Language,
    Size,
    Developer,
    Intro,
    DownloadUrl,
    Score,
    UpdateDate,
    UpdateLog,
    Logo,
    LogoOriginUrl,
    PermissionsStr,
    CategoryId,
    IsCrawled,
    LastCrawlTime,
    CreatedAt,
    UpdatedAt,
}
