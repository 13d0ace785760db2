use sea_orm_migration::{prelude::*, schema::*};

static IDX_CATEGORY_NAME_TOP_TYPE: &str = "idx-category-name-top_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .col(string(Category::TopType).default(""))
                    .col(timestamp(Category::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATEGORY_NAME_TOP_TYPE)
                    .table(Category::Table)
                    .col(Category::Name)
                    .col(Category::TopType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATEGORY_NAME_TOP_TYPE)
                    .table(Category::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    TopType,
    CreatedAt,
}
