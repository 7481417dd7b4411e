use crate::server::error::{config::ConfigError, AppError};

const STRIPE_PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    pub access_token_secret: String,

    pub stripe_secret_key: String,
    pub stripe_payment_intents_url: String,

    pub bind_addr: String,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("ACCESS_TOKEN_SECRET".to_string()))?,
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("STRIPE_SECRET_KEY".to_string()))?,
            stripe_payment_intents_url: STRIPE_PAYMENT_INTENTS_URL.to_string(),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }
}
