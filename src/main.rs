use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ranga_api::api::{create_router, AppState};
use ranga_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "ranga_api={level},tower_http={level}",
                level = config.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        photo_dir = %config.photo_dir,
        max_body_bytes = config.max_body_bytes,
        "Starting ranga-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.bind_addr();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
