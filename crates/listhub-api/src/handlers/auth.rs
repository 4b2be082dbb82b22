//! Auth handlers: register, login, me.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};

use listhub_core::error::AppError;

use crate::dto::request::{LoginForm, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(&req.email, &req.username, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login
///
/// Takes an OAuth2 password-style form body, not JSON.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Form(form) = form.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(TokenResponse::from(token)))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.user))
}
