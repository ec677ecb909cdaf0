use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use study_attendance::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use study_attendance::modules::attendance::adapters::outbound::directories_in_memory::{
    DirectorySeed, InMemoryDirectory,
};
use study_attendance::shared::core::clock::SystemClock;
use study_attendance::shell::{self, DEFAULT_LOG_FILTER, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let directory = match &config.seed_path {
        Some(path) => {
            let seed = DirectorySeed::from_json_file(path)?;
            tracing::info!(
                users = seed.users.len(),
                studies = seed.studies.len(),
                events = seed.events.len(),
                "directory seeded from {}",
                path.display()
            );
            InMemoryDirectory::from_seed(seed)
        }
        None => InMemoryDirectory::new(),
    };

    let state = AppState::in_memory(
        Arc::new(InMemoryAttendanceStore::new()),
        Arc::new(directory),
        Arc::new(SystemClock),
        config.check_window,
        config.weights,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("REST endpoint: http://{}/attendance", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, shell::app(state)).await?;
    Ok(())
}
