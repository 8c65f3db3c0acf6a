//! STEM KEEA site backend server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stem_keea_site::config::{Config, LogFormat};
use stem_keea_site::store::{default_seed, load_seed, ContentStore};
use stem_keea_site::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting STEM KEEA site backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.admin.password == "password" {
        tracing::warn!("Using the default admin password (SITE_ADMIN_PASSWORD)");
    }

    // Build the store
    let seed = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => default_seed(),
    };
    let store = ContentStore::new(seed);
    tracing::info!(
        news = store.news().len(),
        programs = store.programs().len(),
        events = store.events().len(),
        team = store.team().len(),
        gallery = store.gallery().len(),
        "Content store ready"
    );

    let bind_addr = config.bind_addr;
    let app = create_router(AppState::new(store, config));

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
