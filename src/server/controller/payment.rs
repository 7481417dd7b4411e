use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UpdateResultDto},
        payment::{ConfirmPaymentDto, CreatePaymentIntentDto, PaymentIntentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{payment::PaymentGateway, registration::RegistrationService},
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// POST /payments/intent - Create a payment intent for camp fees.
///
/// Validates the fee amount and asks the gateway for a client secret the
/// frontend completes the charge with. A missing, non-numeric, or non-positive
/// fee is rejected with a 400 before any gateway call.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Client secret for the created intent
/// - `400 Bad Request` - Fee is not a positive number
/// - `401 Unauthorized` - Missing or invalid credential
/// - `500 Internal Server Error` - Gateway call failed
#[utoipa::path(
    post,
    path = "/payments/intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentDto),
        (status = 400, description = "Fee is not a positive number", body = ErrorDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[]).await?;

    let fees = payload
        .fees
        .as_f64()
        .filter(|f| f.is_finite() && *f > 0.0)
        .ok_or_else(|| AppError::BadRequest("Fee must be a positive number".to_string()))?;

    // Gateway amounts are integral cents.
    let amount_cents = (fees * 100.0).round() as i64;

    let gateway = PaymentGateway::new(
        state.http_client.clone(),
        state.stripe_secret_key.clone(),
        state.stripe_payment_intents_url.clone(),
    );

    let client_secret = gateway.create_payment_intent(amount_cents).await?;

    Ok((StatusCode::OK, Json(PaymentIntentDto { client_secret })))
}

/// POST /payments/confirm - Finalize a paid registration.
///
/// Invoked with the gateway's transaction identifier after a successful
/// charge. Marks the matching join record paid and feedback-eligible; a
/// callback naming no known registration fails distinctly from success.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Raw update result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No join record matches the callback
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/payments/confirm",
    tag = PAYMENT_TAG,
    request_body = ConfirmPaymentDto,
    responses(
        (status = 200, description = "Payment recorded", body = UpdateResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 404, description = "No matching join record", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ConfirmPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[]).await?;

    let service = RegistrationService::new(&state.db);
    let modified_count = service
        .finalize_payment(payload.registration_id, &payload.transaction_id)
        .await?;

    if modified_count == 0 {
        return Err(AppError::NotFound(
            "No registration matches this payment".to_string(),
        ));
    }

    Ok((StatusCode::OK, Json(UpdateResultDto { modified_count })))
}
