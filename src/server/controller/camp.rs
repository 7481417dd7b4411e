use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, UpdateResultDto},
        camp::{CampDto, CreateCampDto, ParticipantCountDto, UpdateCampDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::camp::{CountAction, CreateCampParam, UpdateCampParam},
        service::camp::CampService,
        state::AppState,
    },
};

/// Tag for grouping camp endpoints in OpenAPI documentation
pub static CAMP_TAG: &str = "camp";

/// GET /camps - List all camps.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - JSON array of camps
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/camps",
    tag = CAMP_TAG,
    responses(
        (status = 200, description = "All camps", body = Vec<CampDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camps(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CampService::new(&state.db);
    let camps = service.get_all().await?;

    let camps_dto: Vec<_> = camps.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(camps_dto)))
}

/// GET /camps/{id} - Fetch a single camp.
///
/// A nonexistent id is not an error: the handler returns a JSON `null` body,
/// mirroring an empty point lookup.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The camp, or `null` when no camp has that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/camps/{id}",
    tag = CAMP_TAG,
    params(
        ("id" = i32, Path, description = "Camp id")
    ),
    responses(
        (status = 200, description = "The camp, or null when absent", body = Option<CampDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CampService::new(&state.db);
    let camp = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(camp.map(|c| c.into_dto()))))
}

/// POST /camp - Create a new camp.
///
/// # Access Control
/// - `Admin` - Only admins can create camps
///
/// # Returns
/// - `201 Created` - The created camp
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/camp",
    tag = CAMP_TAG,
    request_body = CreateCampDto,
    responses(
        (status = 201, description = "Camp created", body = CampDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCampDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = CampService::new(&state.db);

    let param = CreateCampParam::from_dto(payload);
    let camp = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(camp.into_dto())))
}

/// PATCH /camp/{id} - Update a camp.
///
/// # Access Control
/// - `Admin` - Only admins can update camps
///
/// # Returns
/// - `200 OK` - Raw update result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `404 Not Found` - No camp with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/camp/{id}",
    tag = CAMP_TAG,
    params(
        ("id" = i32, Path, description = "Camp id")
    ),
    request_body = UpdateCampDto,
    responses(
        (status = 200, description = "Camp updated", body = UpdateResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateCampDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = CampService::new(&state.db);

    let param = UpdateCampParam::from_dto(payload);
    let modified_count = service.update(id, param).await?;

    if modified_count == 0 {
        return Err(AppError::NotFound("Camp not found".to_string()));
    }

    Ok((StatusCode::OK, Json(UpdateResultDto { modified_count })))
}

/// DELETE /camps/{id} - Delete a camp.
///
/// # Access Control
/// - `Admin` - Only admins can delete camps
///
/// # Returns
/// - `200 OK` - Raw delete result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `404 Not Found` - No camp with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/camps/{id}",
    tag = CAMP_TAG,
    params(
        ("id" = i32, Path, description = "Camp id")
    ),
    responses(
        (status = 200, description = "Camp deleted", body = DeleteResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_camp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = CampService::new(&state.db);
    let deleted_count = service.delete(id).await?;

    if deleted_count == 0 {
        return Err(AppError::NotFound("Camp not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeleteResultDto { deleted_count })))
}

/// PATCH /participant-count/{id} - Adjust a camp's participant counter.
///
/// The body's `action` must be `increment` or `decrement`; any other value is
/// rejected with a 400. The delta is applied atomically at the store level so
/// concurrent adjustments cannot lose updates.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Raw update result
/// - `400 Bad Request` - Unrecognized action
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No camp with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/participant-count/{id}",
    tag = CAMP_TAG,
    params(
        ("id" = i32, Path, description = "Camp id")
    ),
    request_body = ParticipantCountDto,
    responses(
        (status = 200, description = "Counter adjusted", body = UpdateResultDto),
        (status = 400, description = "Unrecognized action", body = ErrorDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_participant_count(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<ParticipantCountDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[]).await?;

    let Some(action) = CountAction::parse(&payload.action) else {
        return Err(AppError::BadRequest(format!(
            "Unrecognized action: {}",
            payload.action
        )));
    };

    let service = CampService::new(&state.db);
    let modified_count = service.adjust_participants(id, action).await?;

    if modified_count == 0 {
        return Err(AppError::NotFound("Camp not found".to_string()));
    }

    Ok((StatusCode::OK, Json(UpdateResultDto { modified_count })))
}
