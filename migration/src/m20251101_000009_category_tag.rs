use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_category::Category, m20251101_000004_tag::Tag};

static FK_CATEGORY_TAG_CATEGORY_ID: &str = "fk-category_tag-category_id";
static FK_CATEGORY_TAG_TAG_ID: &str = "fk-category_tag-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryTag::Table)
                    .if_not_exists()
                    .col(integer(CategoryTag::CategoryId))
                    .col(integer(CategoryTag::TagId))
                    .primary_key(Index::create().col(CategoryTag::CategoryId).col(CategoryTag::TagId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CATEGORY_TAG_CATEGORY_ID)
                    .from_tbl(CategoryTag::Table)
                    .from_col(CategoryTag::CategoryId)
                    .to_tbl(Category::Table)
                    .to_col(Category::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CATEGORY_TAG_TAG_ID)
                    .from_tbl(CategoryTag::Table)
                    .from_col(CategoryTag::TagId)
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
                    .name(FK_CATEGORY_TAG_TAG_ID)
                    .table(CategoryTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CATEGORY_TAG_CATEGORY_ID)
                    .table(CategoryTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CategoryTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CategoryTag {
    Table,
    CategoryId,
    TagId,
}
