use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::Unauthenticated => tracing::debug!("Request rejected: no valid session"),
            _ => tracing::error!(error = ?self, "Request failed"),
        }

        match self {
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, Some(msg))
            }
            AppError::Unauthenticated => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::Unauthenticated, None)
            }
            AppError::CookieJar(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::CookieJarError, None)
            }
            AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, None)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
