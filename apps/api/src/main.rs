mod config;
mod errors;
mod llm_client;
mod recommendation;
mod routes;
mod state;
mod store;
mod survey;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendation::Recommender;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::firestore::{FirestoreStore, ServiceAccountKey};
use crate::store::ResponseStore;
use crate::survey::variants::survey_config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing secrets)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Indoro API v{}", env!("CARGO_PKG_VERSION"));

    // Survey variant is fixed for the life of the process
    let mut survey = survey_config(config.survey_variant);
    if let Some(model) = &config.openai_model {
        survey.model = model.clone();
    }
    survey
        .validate()
        .with_context(|| format!("Survey variant '{}' is misconfigured", survey.variant))?;
    info!(
        "Survey '{}' loaded: {} questions, model {}",
        survey.variant,
        survey.questions.len(),
        survey.model
    );
    let survey = Arc::new(survey);

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    // Initialize LLM client
    let llm = LlmClient::with_base_url(
        http.clone(),
        config.openai_api_key.clone(),
        &config.openai_base_url,
    );
    info!("LLM client initialized ({})", config.openai_base_url);

    // Initialize Firestore
    let key = ServiceAccountKey::from_json(&config.firebase_key)
        .context("Failed to parse Firebase service-account key")?;
    let firestore = FirestoreStore::new(http, key, config.firestore_project_id.clone())
        .with_base_url(&config.firestore_base_url);
    info!("Firestore client initialized (project: {})", firestore.project_id());

    // Build app state
    let state = AppState {
        recommender: Recommender::new(Arc::new(llm), survey.clone()),
        store: ResponseStore::new(Arc::new(firestore)),
        survey,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the survey frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
