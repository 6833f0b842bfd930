use axum::{Json, Router, middleware, routing::post};
use tracing::debug;

use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{CurrentSession, require_session},
    },
    application::tool_label::{ToolBadge, ToolInvocation, tool_badge},
};

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/tool-label", post(tool_label))
        .route_layer(middleware::from_fn_with_state(app_state, require_session))
}

/// POST /api/chat/tool-label
async fn tool_label(
    CurrentSession(session): CurrentSession,
    Json(invocation): Json<ToolInvocation>,
) -> Json<ToolBadge> {
    debug!(
        user_id = %session.user_id,
        tool = %invocation.tool_name,
        "labelling tool invocation"
    );
    Json(tool_badge(&invocation))
}
