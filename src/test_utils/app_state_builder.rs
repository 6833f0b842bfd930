//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, setup::build_app_state},
    test_utils::{FixedClock, T0, test_secret},
};

/// Builds an `AppState` wired the same way as production, but keyed with the
/// test secret and driven by a [`FixedClock`].
///
/// # Example
///
/// ```ignore
/// let clock = FixedClock::at(T0);
/// let token = test_token(&clock, "user-123", "a@example.com");
/// let app_state = TestAppStateBuilder::new().with_clock(clock).build();
/// ```
pub struct TestAppStateBuilder {
    clock: Arc<FixedClock>,
    secure_cookies: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            clock: FixedClock::at(T0),
            secure_cookies: false,
        }
    }

    pub fn with_clock(mut self, clock: Arc<FixedClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            jwt_secret: test_secret(),
            secure_cookies: self.secure_cookies,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
        };

        build_app_state(config, self.clock).unwrap()
    }
}
