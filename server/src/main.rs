//! Galaxy API server.
//!
//! Configuration comes from the environment (a `.env` file is read first):
//! `DATABASE_URL`, `PORT`, `DEFAULT_USER_ID`, `DATABASE_MAX_CONNECTIONS`, `SEED_PATH`, `RUST_LOG`.

use galaxy_api::{app, init, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("galaxy_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let port = settings.port;
    let state = init(settings).await?;

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
