use anyhow::Context as _;
use std::sync::Arc;
use tera::Tera;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use petdash::petfinder::PetfinderClient;
use petdash::{router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("petdash=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let tera = Tera::new(&config.templates_glob)
        .with_context(|| format!("parsing templates from {}", config.templates_glob))?;
    let petfinder = PetfinderClient::new(config.petfinder.clone())?;

    info!(api = %petfinder.config().base_url, "Using Petfinder API");

    let state = Arc::new(AppState::new(tera, petfinder));
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
