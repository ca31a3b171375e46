mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dinerec_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let table = dinerec_dataset::load_table(&config.dataset_path)?;
    let cities = dinerec_dataset::unique_cities(&table);
    let cuisines = dinerec_dataset::unique_cuisines(&table);

    let ranker = match &config.groq_api_key {
        Some(key) => {
            let mut groq = dinerec_groq::GroqConfig::new(key.clone());
            groq.model = config.groq_model.clone();
            groq.base_url = config.groq_base_url.clone();
            groq.timeout_secs = config.groq_timeout_secs;
            Some(dinerec_groq::GroqClient::new(groq)?)
        }
        None => {
            tracing::warn!("GROQ_API_KEY not set; serving deterministic rankings only");
            None
        }
    };

    let engine = dinerec_engine::RecommendationEngine::new(table, ranker, config.tiers)
        .with_limits(config.candidate_limit, config.top_n);

    let state = AppState {
        engine: Arc::new(engine),
        cities: Arc::new(cities),
        cuisines: Arc::new(cuisines),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "dinerec-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
