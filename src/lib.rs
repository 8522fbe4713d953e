use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tripdeck_itinerary::DataLoader;

pub mod assets;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Load the itinerary datasets and build the app router.
///
/// Also the entry point for integration tests, which point the data
/// directory at a scratch location instead of starting the full server.
pub async fn create_app(config: config::Config) -> anyhow::Result<axum::Router> {
    let loader = DataLoader::new(&config.data.dir);
    let timeout = Duration::from_secs(config.data.load_timeout_secs);

    let store = tokio::time::timeout(timeout, loader.load())
        .await
        .with_context(|| format!("itinerary load timed out after {timeout:?}"))?
        .context("failed to load required itinerary datasets")?;

    Ok(routes::router(AppState {
        config,
        store: Arc::new(store),
    }))
}
