use std::sync::Arc;

use crate::{
    application::session::{RequestVerifier, SessionStore},
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session_store: Arc<SessionStore>,
    pub request_verifier: Arc<RequestVerifier>,
}
