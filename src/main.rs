//! Entry point: load config, wire dependencies, and run the server.

use movies::auth::{AdminCredentials, TokenService};
use movies::config::Config;
use movies::{create_app, AppState, MovieService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        movies: MovieService::seeded(),
        tokens: TokenService::new(&config.jwt_secret, config.jwt_algorithm),
        admin: AdminCredentials::new(config.admin_email.clone(), config.admin_password.clone()),
    };

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, algorithm = ?config.jwt_algorithm, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
