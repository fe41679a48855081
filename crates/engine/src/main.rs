//! Shinobi Sheet Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shinobi_domain::ReferenceCatalog;
use shinobi_engine::{
    api,
    config::{env_file_dirs, load_env_files, CorsOrigins},
    infrastructure::persistence::SqliteCharacterRepo,
    use_cases::StatPolicy,
    App, EngineConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = load_env_files(&env_file_dirs())?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shinobi_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(env_files = ?env_files, "Starting Shinobi Sheet Engine");

    let config = EngineConfig::from_env()?;

    tracing::info!(path = %config.database_path, "Opening character store");
    let repo = SqliteCharacterRepo::new(&config.database_path).await?;

    let policy = StatPolicy {
        clamp_current_to_max: config.clamp_current_to_max,
    };
    if policy.clamp_current_to_max {
        tracing::info!("Current hp/chakra will be clamped to their maxima");
    }

    let app = Arc::new(App::new(
        Arc::new(repo),
        Arc::new(ReferenceCatalog::bundled()),
        policy,
    ));

    match &config.cors_allowed_origins {
        CorsOrigins::Any => tracing::info!("CORS: any origin"),
        CorsOrigins::List(origins) => tracing::info!(origins = ?origins, "CORS: restricted"),
    }

    let router = api::http::routes()
        .with_state(app)
        .layer(api::http::cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
