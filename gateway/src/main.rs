mod config;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use dotenvy::dotenv;
use enhancer_ai::refiner::{OpenAiRefiner, PromptRefiner};
use enhancer_core::store::{DbPromptStore, PromptStore};
use sea_orm::Database;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let settings = Settings::from_env();

    info!(backend = settings.database_backend(), "connecting to database");
    let db = Database::connect(&settings.database_url).await?;
    enhancer_core::ensure_schema(&db).await?;

    let store = Arc::new(DbPromptStore::new(db));
    let refiner = Arc::new(OpenAiRefiner::new(settings.openai_base_url.clone()));
    let app = build_app(store, refiner, settings.max_body_bytes);

    let listener = bind(&settings).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shut down");
    Ok(())
}

/// Resolves `host` first, so names like `localhost` and bare IPv6 like `::` bind.
async fn bind(settings: &Settings) -> std::io::Result<TcpListener> {
    TcpListener::bind((settings.host.as_str(), settings.port)).await
}

fn build_app(
    store: Arc<dyn PromptStore>,
    refiner: Arc<dyn PromptRefiner>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .merge(enhancer_core::urls::router(store))
        .merge(enhancer_ai::urls::router(refiner))
        // any origin, method and header; credentials allowed
        .layer(CorsLayer::very_permissive())
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining in-flight requests");
}
