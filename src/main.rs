use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neon_api_service::config::Settings;
use neon_api_service::infrastructure::postgres::PostgresPool;
use neon_api_service::probe;
use neon_api_service::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    // Build the connection pool. Nothing is dialed here; connections open
    // on first use.
    let db = PostgresPool::connect_lazy(&settings.database)?;

    // Fire the startup connectivity probe in the background. The listener
    // does not wait for it, and a failed probe does not stop the process.
    let probe_db = db.clone();
    tokio::spawn(async move {
        probe::run_startup_probe(probe_db).await;
    });

    // Create application state and Axum app
    let state = AppState::new(settings.clone(), db);
    let app = create_app(state);

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
