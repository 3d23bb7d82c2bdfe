use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use timetracker::modules::time_entries::application::time_tracker::TimeTracker;
use timetracker::shared::core::clock::SystemClock;
use timetracker::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use timetracker::shared::infrastructure::ticker::tokio_ticker::TokioTicker;
use timetracker::shell::config::Config;
use timetracker::shell::http::router;
use timetracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("invalid configuration")?;

    let store = Arc::new(FileKeyValueStore::new(&config.data_dir));
    let tracker = TimeTracker::new(store, Arc::new(SystemClock), Arc::new(TokioTicker::new()));
    let app = router(AppState::new(tracker), &config.assets_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        assets_dir = %config.assets_dir.display(),
        "Timetracker listening on http://{addr}"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
