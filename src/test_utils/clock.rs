use std::sync::{Arc, Mutex};

use secrecy::SecretString;
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::application::{jwt::SessionTokenCodec, ports::Clock};

/// Fixed instant most tests start from.
pub const T0: OffsetDateTime = datetime!(2025-01-01 12:00 UTC);

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough-for-hs256";

/// Clock that only moves when a test moves it.
pub struct FixedClock {
    now: Mutex<OffsetDateTime>,
}

impl FixedClock {
    pub fn at(now: OffsetDateTime) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: OffsetDateTime) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}

pub fn test_secret() -> SecretString {
    SecretString::new(TEST_JWT_SECRET.into())
}

/// Codec keyed with [`TEST_JWT_SECRET`] and driven by `clock`.
pub fn test_codec(clock: Arc<FixedClock>) -> SessionTokenCodec {
    SessionTokenCodec::new(&test_secret(), clock).unwrap()
}

/// Mints a token at the clock's current time, ready to send as a cookie.
pub fn test_token(clock: &Arc<FixedClock>, user_id: &str, email: &str) -> String {
    test_codec(clock.clone())
        .mint(user_id, email)
        .unwrap()
        .token
}
