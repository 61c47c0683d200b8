//! Authentication API endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::auth::{LoginRequest, LoginResponse},
    AppState,
};

use super::AppJson;

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing or malformed credentials", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<Option<LoginRequest>>,
) -> AppResult<Json<LoginResponse>> {
    let request = request
        .ok_or_else(|| AppError::BadRequest("Login credentials are required".to_string()))?;

    let token = state
        .services
        .auth
        .login(&request.username, &request.password)?;

    Ok(Json(LoginResponse { token }))
}
