mod model;
mod server;

use crate::server::{
    config::Config, middleware::jwt::JwtKeys, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::setup_cors(&config)?;

    // Derive the credential signing keys once; immutable for the process lifetime.
    let jwt_keys = JwtKeys::from_secret(&config.access_token_secret);

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            jwt_keys,
            config.stripe_secret_key.clone(),
            config.stripe_payment_intents_url.clone(),
        ))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
