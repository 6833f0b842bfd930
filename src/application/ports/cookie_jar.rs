use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::OffsetDateTime;

use crate::app_error::AppResult;

/// A cookie as the session layer writes it: name, value and the attributes
/// that go out with `Set-Cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    pub value: String,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: &'static str,
    pub expires: OffsetDateTime,
}

impl SessionCookie {
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.name, self.value.clone()))
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .path(self.path)
            .expires(self.expires)
            .build()
    }
}

/// Per-request cookie jar handed to the session store.
///
/// Reads see cookies written earlier in the same request. Errors are
/// transport/storage failures and are passed through to the caller as-is.
#[async_trait]
pub trait SessionCookieJar: Send + Sync {
    async fn get(&self, name: &str) -> AppResult<Option<String>>;
    async fn set(&self, cookie: SessionCookie) -> AppResult<()>;
    /// Removing a cookie that is not there is not an error.
    async fn delete(&self, name: &str) -> AppResult<()>;
}
