//! Test utilities shared by unit and HTTP-level tests.
//!
//! This module provides:
//! - A pinned clock and token helpers built on the test secret
//! - In-memory cookie jars for driving the session store without HTTP
//! - A builder for a fully wired `AppState`

mod app_state_builder;
mod clock;
mod cookie_jar_mocks;

pub use app_state_builder::*;
pub use clock::*;
pub use cookie_jar_mocks::*;
