use apphub::{config::Config, startup};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let http = startup::build_http_client(&config).unwrap();
    let pipeline = startup::build_pipeline(&config, db, http).await.unwrap();

    tracing::info!(
        "Database migrated, pipeline ready: {}",
        pipeline.stage_names().join(" -> ")
    );

    pipeline.close().await.unwrap();
}
