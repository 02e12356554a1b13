mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutritrack_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("nutritrack-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = config.bind_addr()?;
    let app = routes::app_router(AppState::new());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Health check: GET {}", routes::HEALTH);
    for (method, path) in routes::ENDPOINTS {
        tracing::info!("  {:<4} {}", method, path);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
