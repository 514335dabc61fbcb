use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weaviate_dashboard_rust::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up WEAVIATE_HOST and friends.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env()?;
    init_tracing(config.server.debug);

    tracing::info!("Starting Weaviate dashboard...");
    tracing::info!("Weaviate URL: {}", config.weaviate.url());

    let bind_addr = config.server.bind_addr();
    let state = Arc::new(AppState::new(config));
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Weaviate dashboard listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_directives = if debug {
        "debug,tower_http=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_directives.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
