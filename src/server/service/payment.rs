//! Payment gateway client.
//!
//! Wraps the gateway's payment-intent endpoint behind a small service so the
//! rest of the application only ever sees "amount in, client secret out". The
//! gateway's protocol internals are out of scope; a failed call surfaces as a
//! request error.

use serde::Deserialize;

use crate::server::error::AppError;

/// Subset of the gateway's payment-intent response the application reads.
#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

/// Client for the external payment gateway.
pub struct PaymentGateway {
    http_client: reqwest::Client,
    secret_key: String,
    endpoint: String,
}

impl PaymentGateway {
    pub fn new(http_client: reqwest::Client, secret_key: String, endpoint: String) -> Self {
        Self {
            http_client,
            secret_key,
            endpoint,
        }
    }

    /// Creates a payment intent and returns its client secret.
    ///
    /// # Arguments
    /// - `amount_cents` - Charge amount in the smallest currency unit
    ///
    /// # Returns
    /// - `Ok(String)` - Client secret for the created intent
    /// - `Err(AppError::ReqwestErr)` - Gateway unreachable or returned an error status
    pub async fn create_payment_intent(&self, amount_cents: i64) -> Result<String, AppError> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<PaymentIntentResponse>()
            .await?;

        Ok(response.client_secret)
    }
}
