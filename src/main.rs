mod api_doc;
mod app;
mod campus;
mod config;
mod error;
mod handlers;
mod models;
mod query;
mod routes;
mod state;
#[cfg(test)]
mod test_fixture;

use std::sync::Arc;

use anyhow::Context;
use campus::CampusGraph;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_paths=info,tower_http=info")),
        )
        .init();

    tracing::info!("campus-paths starting");

    let config = Config::from_env()?;
    config.log_startup();

    let graph = CampusGraph::from_file(&config.campus_data_path)?;
    tracing::info!(
        "Loaded campus graph from {}",
        config.campus_data_path.display()
    );

    let address = config.bind_address();
    let state = AppState {
        query_service: Arc::new(graph),
        config: Arc::new(config),
    };
    let app = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
