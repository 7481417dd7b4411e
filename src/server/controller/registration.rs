use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertResultDto, UpdateResultDto},
        registration::{JoinCampDto, RegistrationDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::registration::JoinCampParam,
        service::registration::RegistrationService,
        state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTRATION_TAG: &str = "registration";

/// POST /join-camps - Register a participant for a camp.
///
/// Inserts a join record in unpaid, pending state. The camp's participant
/// counter is adjusted separately through the counter route.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - Raw insert result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/join-camps",
    tag = REGISTRATION_TAG,
    request_body = JoinCampDto,
    responses(
        (status = 201, description = "Join record created", body = InsertResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_camp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinCampDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[]).await?;

    let service = RegistrationService::new(&state.db);

    let param = JoinCampParam::from_dto(payload);
    let registration = service.join(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResultDto {
            inserted_id: registration.id,
        }),
    ))
}

/// GET /registeredCamps/{email} - List one participant's join records.
///
/// The requested email must equal the credential's embedded email; no
/// cross-user reads are permitted even with a valid credential.
///
/// # Access Control
/// - Authenticated; owner only
///
/// # Returns
/// - `200 OK` - The participant's join records
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Requested email differs from the credential's email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/registeredCamps/{email}",
    tag = REGISTRATION_TAG,
    params(
        ("email" = String, Path, description = "Participant email")
    ),
    responses(
        (status = 200, description = "The participant's join records", body = Vec<RegistrationDto>),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Requested email is not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_registrations(
    State(state): State<AppState>,
    Path(email): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let claims = auth_guard.require(&headers, &[]).await?;
    auth_guard.require_owner(&claims, &email)?;

    let service = RegistrationService::new(&state.db);
    let registrations = service.for_participant(&email).await?;

    let registrations_dto: Vec<_> = registrations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(registrations_dto)))
}

/// GET /registeredCamps - List all join records.
///
/// # Access Control
/// - `Admin` - Only admins can list every participant's registrations
///
/// # Returns
/// - `200 OK` - All join records
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/registeredCamps",
    tag = REGISTRATION_TAG,
    responses(
        (status = 200, description = "All join records", body = Vec<RegistrationDto>),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_registrations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = RegistrationService::new(&state.db);
    let registrations = service.get_all().await?;

    let registrations_dto: Vec<_> = registrations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(registrations_dto)))
}

/// PATCH /join-camps/{id}/confirm - Confirm a registration.
///
/// # Access Control
/// - `Admin` - Only organizers confirm registrations
///
/// # Returns
/// - `200 OK` - Raw update result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `404 Not Found` - No join record with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/join-camps/{id}/confirm",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Join record id")
    ),
    responses(
        (status = 200, description = "Registration confirmed", body = UpdateResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Join record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = RegistrationService::new(&state.db);
    let modified_count = service.confirm(id).await?;

    if modified_count == 0 {
        return Err(AppError::NotFound("Registration not found".to_string()));
    }

    Ok((StatusCode::OK, Json(UpdateResultDto { modified_count })))
}

/// DELETE /join-camps/{id} - Cancel a registration.
///
/// Participants may cancel their own registrations; admins may cancel any.
///
/// # Access Control
/// - Authenticated; owner or admin
///
/// # Returns
/// - `200 OK` - Raw delete result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Record belongs to someone else and caller is not admin
/// - `404 Not Found` - No join record with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/join-camps/{id}",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Join record id")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = DeleteResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Not the caller's registration", body = ErrorDto),
        (status = 404, description = "Join record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let claims = auth_guard.require(&headers, &[]).await?;

    let service = RegistrationService::new(&state.db);

    let Some(registration) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("Registration not found".to_string()));
    };

    if registration.participant_email != claims.email && !auth_guard.is_admin(&claims.email).await?
    {
        return Err(AuthError::OwnershipMismatch {
            actual: claims.email,
            requested: registration.participant_email,
        }
        .into());
    }

    let deleted_count = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(DeleteResultDto { deleted_count })))
}
