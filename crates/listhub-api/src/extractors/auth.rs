//! Authenticated user extractor.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use listhub_core::error::AppError;
use listhub_entity::user::User;
use listhub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller behind a valid `Authorization: Bearer <token>` header.
///
/// Handlers that take this extractor reject anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub context: RequestContext,
}

impl Deref for AuthUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::authentication("Not authenticated"))?;

        let user = state.auth_service.resolve_token(bearer.token()).await?;
        let context = RequestContext::for_user(&user);

        Ok(Self { user, context })
    }
}
