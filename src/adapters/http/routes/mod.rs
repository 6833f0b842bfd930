pub mod auth;
pub mod chat;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/chat", chat::router(app_state))
}
