use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::{TokenDto, TokenRequestDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// POST /jwt - Issue an access credential for the supplied identity payload.
///
/// Signs the claims object the client presents at login. The payload is not
/// checked against stored users; possession of a credential proves nothing
/// beyond what the role authorizer later verifies.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Signed access credential", body = TokenDto)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.jwt_keys.issue(payload.email, payload.claims)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
