//! [`SessionCookieJar`] over axum-extra's request cookie jar.
//!
//! Handlers take the `CookieJar` extractor, wrap it for the session store, and
//! return [`AxumCookieJar::into_inner`] with the response so that every cookie
//! written through the store becomes a `Set-Cookie` header.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{SessionCookie, SessionCookieJar},
};

pub struct AxumCookieJar {
    jar: Mutex<CookieJar>,
}

impl AxumCookieJar {
    pub fn new(jar: CookieJar) -> Self {
        Self {
            jar: Mutex::new(jar),
        }
    }

    pub fn into_inner(self) -> CookieJar {
        self.jar.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, CookieJar>> {
        self.jar
            .lock()
            .map_err(|_| AppError::CookieJar("cookie jar lock poisoned".into()))
    }
}

#[async_trait]
impl SessionCookieJar for AxumCookieJar {
    async fn get(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(name).map(|c| c.value().to_owned()))
    }

    async fn set(&self, cookie: SessionCookie) -> AppResult<()> {
        let mut jar = self.lock()?;
        *jar = jar.clone().add(cookie.to_cookie());
        Ok(())
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        // Path must match the one the cookie was set with or browsers keep it.
        let removal = Cookie::build((name.to_owned(), "")).path("/").build();
        let mut jar = self.lock()?;
        *jar = jar.clone().remove(removal);
        Ok(())
    }
}
