use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::Error,
    pipeline::{
        chain::PipelineChain, filter::FilterPipeline, identification::IdentificationPipeline,
        image::AppImagePipeline, store::StoreAppPipeline,
    },
    service::{
        image::{FilesystemImageStore, ImageFetcher},
        sync::SyncClient,
    },
};

/// Build the HTTP client shared by image downloads and sync API calls
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let http = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.http_timeout)
        .build()?;

    Ok(http)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the pipeline chain in its fixed stage order
///
/// Creates the image store directory if it does not exist yet.
pub async fn build_pipeline(
    config: &Config,
    db: DatabaseConnection,
    http: reqwest::Client,
) -> Result<PipelineChain, Error> {
    let image_store = FilesystemImageStore::new(&config.images_store).await?;
    let fetcher = ImageFetcher::new(http.clone(), Arc::new(image_store));
    let sync = SyncClient::new(http, &config.data_sync_api);

    Ok(PipelineChain::new()
        .with_stage(FilterPipeline::new(db.clone()))
        .with_stage(IdentificationPipeline::new(db.clone()))
        .with_stage(AppImagePipeline::new(fetcher))
        .with_stage(StoreAppPipeline::new(db, sync)))
}
