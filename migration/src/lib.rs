pub use sea_orm_migration::prelude::*;

mod m20251101_000001_app_identification;
mod m20251101_000002_category;
mod m20251101_000003_permission;
mod m20251101_000004_tag;
mod m20251101_000005_app;
mod m20251101_000006_screenshot;
mod m20251101_000007_app_permission;
mod m20251101_000008_app_tag;
mod m20251101_000009_category_tag;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_app_identification::Migration),
            Box::new(m20251101_000002_category::Migration),
            Box::new(m20251101_000003_permission::Migration),
            Box::new(m20251101_000004_tag::Migration),
            Box::new(m20251101_000005_app::Migration),
            Box::new(m20251101_000006_screenshot::Migration),
            Box::new(m20251101_000007_app_permission::Migration),
            Box::new(m20251101_000008_app_tag::Migration),
            Box::new(m20251101_000009_category_tag::Migration),
        ]
    }
}
