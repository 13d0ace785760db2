use sea_orm_migration::{prelude::*, schema::*};

static IDX_APP_IDENTIFICATION_IS_CRAWLED: &str = "idx-app_identification-is_crawled";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppIdentification::Table)
                    .if_not_exists()
                    .col(pk_auto(AppIdentification::Id))
                    .col(string_uniq(AppIdentification::ApkName))
                    .col(string_null(AppIdentification::TopType))
                    .col(boolean(AppIdentification::IsCrawled).default(false))
                    .col(timestamp(AppIdentification::CreatedAt))
                    .col(timestamp(AppIdentification::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_IDENTIFICATION_IS_CRAWLED)
                    .table(AppIdentification::Table)
                    .col(AppIdentification::IsCrawled)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_IDENTIFICATION_IS_CRAWLED)
                    .table(AppIdentification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppIdentification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppIdentification {
    Table,
    Id,
    ApkName,
    TopType,
    IsCrawled,
    CreatedAt,
    UpdatedAt,
}
