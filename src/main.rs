// src/main.rs

use std::str::FromStr;
use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use reportcard::api::http::http_router;
use reportcard::config::AppConfig;
use reportcard::services::FeedbackService;
use reportcard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from_str(&config.log_level).unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting feedback improvement API");
    info!("Model: {}", config.model);

    // Fails fast when OPENAI_API_KEY is missing
    let feedback_service = FeedbackService::new(&config)?;

    let bind_address = config.bind_address();
    let app_state = Arc::new(AppState {
        config,
        feedback_service: Arc::new(feedback_service),
    });

    let app = http_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
