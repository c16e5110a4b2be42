use anyhow::{Context, Result};
use tracing::{error, info, warn};

use healthcare_translator::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (absent in production deployments)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthcare_translator=info,tower_http=info".into()),
        )
        .init();

    info!("Healthcare Translator API starting up...");

    let config = Config::from_env()?;
    check_environment(&config);

    let app_state = AppState::new(config.clone())?;
    let app = routes::create_routes(app_state, &config.allowed_origins);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Starting server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Log the startup environment. A missing key is reported but does not
/// stop the server; /health surfaces it.
fn check_environment(config: &Config) {
    if config.has_api_key() {
        info!("GROQ_API_KEY found");
    } else {
        error!("GROQ_API_KEY not found in environment variables");
    }

    info!("Port: {}", config.server.port);
    info!("Environment: {}", config.server.environment);
    info!("Model: {}", config.llm.model);
    info!("Allowed origins: {:?}", config.allowed_origins);

    if config.is_development() {
        warn!("Development mode: configuration is reloaded from the environment on every request");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
