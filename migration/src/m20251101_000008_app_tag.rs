use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000005_app::App, m20251101_000004_tag::Tag};

static FK_APP_TAG_APP_ID: &str = "fk-app_tag-app_id";
static FK_APP_TAG_TAG_ID: &str = "fk-app_tag-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppTag::Table)
                    .if_not_exists()
                    .col(integer(AppTag::AppId))
                    .col(integer(AppTag::TagId))
                    .primary_key(Index::create().col(AppTag::AppId).col(AppTag::TagId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_TAG_APP_ID)
                    .from_tbl(AppTag::Table)
                    .from_col(AppTag::AppId)
                    .to_tbl(App::Table)
                    .to_col(App::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_TAG_TAG_ID)
                    .from_tbl(AppTag::Table)
                    .from_col(AppTag::TagId)
                    .to_tbl(Tag::Table)
                    .to_col(Tag::Id)
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
                    .name(FK_APP_TAG_TAG_ID)
                    .table(AppTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_TAG_APP_ID)
                    .table(AppTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AppTag {
    Table,
    AppId,
    TagId,
}
