//! In-memory [`SessionCookieJar`] implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{SessionCookie, SessionCookieJar},
};

// ============================================================================
// InMemoryCookieJar
// ============================================================================

/// Jar backed by a map. Records every write and delete so tests can assert
/// on what would have gone out as `Set-Cookie`.
#[derive(Default)]
pub struct InMemoryCookieJar {
    values: Mutex<HashMap<String, String>>,
    written: Mutex<Vec<SessionCookie>>,
    deleted: Mutex<Vec<String>>,
}

impl InMemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar as it would look for a request that arrived carrying `name=value`.
    pub fn with_value(name: &str, value: impl Into<String>) -> Self {
        let jar = Self::default();
        jar.values
            .lock()
            .unwrap()
            .insert(name.to_owned(), value.into());
        jar
    }

    pub fn written(&self) -> Vec<SessionCookie> {
        self.written.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionCookieJar for InMemoryCookieJar {
    async fn get(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(name).cloned())
    }

    async fn set(&self, cookie: SessionCookie) -> AppResult<()> {
        self.values
            .lock()
            .unwrap()
            .insert(cookie.name.to_owned(), cookie.value.clone());
        self.written.lock().unwrap().push(cookie);
        Ok(())
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        if self.values.lock().unwrap().remove(name).is_some() {
            self.deleted.lock().unwrap().push(name.to_owned());
        }
        Ok(())
    }
}

// ============================================================================
// FailingCookieJar
// ============================================================================

/// Jar whose every operation fails, as when headers were already flushed.
pub struct FailingCookieJar;

#[async_trait]
impl SessionCookieJar for FailingCookieJar {
    async fn get(&self, _name: &str) -> AppResult<Option<String>> {
        Err(AppError::CookieJar("cookie store unavailable".into()))
    }

    async fn set(&self, _cookie: SessionCookie) -> AppResult<()> {
        Err(AppError::CookieJar("cookie store unavailable".into()))
    }

    async fn delete(&self, _name: &str) -> AppResult<()> {
        Err(AppError::CookieJar("cookie store unavailable".into()))
    }
}
