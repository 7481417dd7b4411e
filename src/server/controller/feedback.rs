use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        feedback::{FeedbackDto, SubmitFeedbackDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::feedback::SubmitFeedbackParam,
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// POST /feedback - Record feedback for a camp.
///
/// The feedback's author email must equal the credential's embedded email.
///
/// # Access Control
/// - Authenticated; owner only
///
/// # Returns
/// - `201 Created` - The recorded feedback
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Author email differs from the credential's email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    request_body = SubmitFeedbackDto,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Author email is not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let claims = auth_guard.require(&headers, &[]).await?;
    auth_guard.require_owner(&claims, &payload.participant_email)?;

    let service = FeedbackService::new(&state.db);

    let param = SubmitFeedbackParam::from_dto(payload);
    let feedback = service.submit(param).await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// GET /feedback - List all feedback.
///
/// Public so the landing page can render testimonials.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - All feedback, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    responses(
        (status = 200, description = "All feedback", body = Vec<FeedbackDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);
    let feedback = service.get_all().await?;

    let feedback_dto: Vec<_> = feedback.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(feedback_dto)))
}
