use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    adapters::http::{app_state::AppState, cookie_jar::AxumCookieJar},
    app_error::AppResult,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    expires_at: Option<OffsetDateTime>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(session))
        .route("/logout", post(logout))
}

/// GET /api/auth/session
///
/// Always 200; an absent, expired or forged cookie reads as
/// `{"authenticated": false}`.
async fn session(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<Json<SessionResponse>> {
    let jar = AxumCookieJar::new(cookies);
    let response = match app_state.session_store.get_session(&jar).await? {
        Some(claims) => SessionResponse {
            authenticated: true,
            user_id: Some(claims.user_id),
            email: Some(claims.email),
            expires_at: Some(claims.expires_at),
        },
        None => SessionResponse {
            authenticated: false,
            user_id: None,
            email: None,
            expires_at: None,
        },
    };
    Ok(Json(response))
}

/// POST /api/auth/logout
async fn logout(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    let jar = AxumCookieJar::new(cookies);
    app_state.session_store.delete_session(&jar).await?;
    Ok((StatusCode::NO_CONTENT, jar.into_inner()))
}
