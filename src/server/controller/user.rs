use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, UpdateResultDto},
        auth::AdminStatusDto,
        user::{RegisterResultDto, RegisterUserDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParam, UpdateProfileParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// POST /users - Register a new user.
///
/// Inserts a user record unless one with the same email already exists, in
/// which case the request succeeds with a message and no inserted id.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - New user registered
/// - `200 OK` - User with that email already exists; nothing was written
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "New user registered", body = RegisterResultDto),
        (status = 200, description = "User already exists", body = RegisterResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let param = RegisterUserParam::from_dto(payload);

    match service.register(param).await? {
        Some(user) => Ok((
            StatusCode::CREATED,
            Json(RegisterResultDto {
                message: None,
                inserted_id: Some(user.id),
            }),
        )),
        None => Ok((
            StatusCode::OK,
            Json(RegisterResultDto {
                message: Some("User already exists".to_string()),
                inserted_id: None,
            }),
        )),
    }
}

/// GET /users - List all users.
///
/// # Access Control
/// - `Admin` - Only admins can list the user base
///
/// # Returns
/// - `200 OK` - JSON array of users
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = UserService::new(&state.db);
    let users = service.get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/admin/{email} - Check whether an email belongs to an admin.
///
/// The requested email must equal the credential's embedded email; no
/// cross-user reads are permitted even with a valid credential. Resolves to
/// `false` when no user record exists or the stored role is not admin.
///
/// # Access Control
/// - Authenticated; owner only
///
/// # Returns
/// - `200 OK` - Admin status of the requested email
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Requested email differs from the credential's email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email to check")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Requested email is not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let claims = auth_guard.require(&headers, &[]).await?;
    auth_guard.require_owner(&claims, &email)?;

    let service = UserService::new(&state.db);
    let admin = service.admin_status(&email).await?;

    Ok((StatusCode::OK, Json(AdminStatusDto { admin })))
}

/// PATCH /user/{id} - Update a user's profile fields.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Raw update result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UpdateResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[]).await?;

    let service = UserService::new(&state.db);

    let param = UpdateProfileParam::from_dto(payload);
    let modified_count = service.update_profile(id, param).await?;

    if modified_count == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(UpdateResultDto { modified_count })))
}

/// DELETE /users/{id} - Delete a user.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - Raw delete result
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Verified identity lacks the admin role
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteResultDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_keys);
    let _ = auth_guard.require(&headers, &[Permission::Admin]).await?;

    let service = UserService::new(&state.db);
    let deleted_count = service.delete_user(id).await?;

    if deleted_count == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeleteResultDto { deleted_count })))
}
