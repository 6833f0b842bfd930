use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppError,
    application::jwt::SessionClaims,
};

/// Route guard: rejects requests without a valid session cookie and stores
/// the verified claims in the request extensions for downstream handlers.
pub async fn require_session(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = app_state
        .request_verifier
        .verify_session(&request)
        .ok_or(AppError::Unauthenticated)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extractor for the verified session.
///
/// Uses the claims left by [`require_session`] when the route is guarded and
/// verifies the request cookie itself otherwise.
pub struct CurrentSession(pub SessionClaims);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<SessionClaims>() {
            return Ok(Self(claims.clone()));
        }

        state
            .request_verifier
            .verify_session(parts)
            .map(Self)
            .ok_or(AppError::Unauthenticated)
    }
}
