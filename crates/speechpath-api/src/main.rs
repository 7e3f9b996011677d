use std::env;
use std::sync::Arc;

use speechpath_api::config::ApiConfig;
use speechpath_api::state::AppState;
use speechpath_catalog::Catalog;
use speechpath_planner::resolver::PlanResolver;
use speechpath_storage::memory::MemoryStore;
use speechpath_storage::s3::S3Store;
use speechpath_storage::store::DocumentStore;
use speechpath_videos::youtube::YouTubeClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(?config, "starting speechpath-api");

    let videos = YouTubeClient::new(config.video.clone())?;
    if !videos.is_configured() {
        tracing::warn!("YOUTUBE_API_KEY is not set; plans will be generated without videos");
    }

    let store: Arc<dyn DocumentStore> = match &config.bucket {
        Some(bucket) => {
            let s3 = speechpath_storage::client::build_client().await;
            Arc::new(S3Store::new(s3, bucket.clone()))
        }
        None => {
            tracing::warn!("SPEECHPATH_BUCKET is not set; plans are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let catalog = Arc::new(Catalog::builtin());
    tracing::info!(diagnoses = catalog.diagnoses().len(), "template catalog loaded");

    let state = AppState {
        resolver: PlanResolver::new(catalog, Arc::new(videos)),
        store,
        language_policy: config.language_policy,
    };
    let app = speechpath_api::router(state);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
