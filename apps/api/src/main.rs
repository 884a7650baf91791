mod analysis;
mod config;
mod errors;
mod extract;
mod insights;
mod llm_client;
mod routes;
mod state;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::insights::store::JsonFileStore;
use crate::insights::summarizer::{DisabledSummarizer, LlmSummarizer, Summarizer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Insights API v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonFileStore::new(&config.data_dir);
    info!("Insight store at {}", store.path().display());

    let summarizer: Arc<dyn Summarizer> = match &config.sarvam_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM summarizer enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmSummarizer(llm))
        }
        None => {
            warn!("SARVAM_API_KEY not set; insights will use word frequency only");
            Arc::new(DisabledSummarizer)
        }
    };

    let state = AppState {
        config: config.clone(),
        store: Arc::new(store),
        summarizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
