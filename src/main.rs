use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use axum::Router;
use dealership_api::config::Config;
use dealership_api::constants::API_NAME;
use dealership_api::handlers::{car, customer, health};
use dealership_api::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Dealership API server on port {}", API_NAME, config.server_port);

    // Create database connection pool
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("{} Connected to database", API_NAME);

    // Build application router
    let app = Router::new()
        .nest("/api/cars", car::router())
        .nest("/api/customers", customer::router())
        .nest("/api", health::router())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(pool));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
