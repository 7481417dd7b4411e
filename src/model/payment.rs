use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for a payment-intent client secret.
///
/// `fees` is accepted as raw JSON and validated in the handler so a
/// non-numeric value yields a 400 rather than a body-rejection.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreatePaymentIntentDto {
    #[schema(value_type = Object)]
    pub fees: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaymentIntentDto {
    pub client_secret: String,
}

/// Gateway success callback payload.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ConfirmPaymentDto {
    pub registration_id: i32,
    pub transaction_id: String,
}
