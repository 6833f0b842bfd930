use crate::{
    adapters::http::app_state::AppState,
    application::{
        jwt::SessionTokenCodec,
        ports::{Clock, SystemClock},
        session::{RequestVerifier, SessionStore},
    },
    infra::config::AppConfig,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();
    let state = build_app_state(config, Arc::new(SystemClock))?;
    Ok(state)
}

/// Wires one codec into both the session store and the request verifier.
pub fn build_app_state(config: AppConfig, clock: Arc<dyn Clock>) -> anyhow::Result<AppState> {
    let codec = Arc::new(SessionTokenCodec::new(&config.jwt_secret, clock)?);

    let session_store = SessionStore::new(codec.clone(), config.secure_cookies);
    let request_verifier = RequestVerifier::new(codec);

    Ok(AppState {
        config: Arc::new(config),
        session_store: Arc::new(session_store),
        request_verifier: Arc::new(request_verifier),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "uigen=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when app.log can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
