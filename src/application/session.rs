//! Session lookup and persistence on top of [`SessionTokenCodec`].
//!
//! Two read paths exist: [`SessionStore::get_session`] for handlers holding a
//! cookie-jar context, and [`RequestVerifier::verify_session`] for guards that
//! only have the raw request. Both hand the token to the same codec, so they
//! always reach the same decision for the same cookie.

use std::sync::Arc;

use axum_extra::extract::cookie::SameSite;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::app_error::AppResult;
use crate::application::jwt::{SessionClaims, SessionTokenCodec};
use crate::application::ports::{RequestCookies, SessionCookie, SessionCookieJar};

pub const SESSION_COOKIE: &str = "auth-token";

/// Builds the `auth-token` cookie for a freshly minted token.
pub fn session_cookie(token: String, expires: OffsetDateTime, secure: bool) -> SessionCookie {
    SessionCookie {
        name: SESSION_COOKIE,
        value: token,
        http_only: true,
        secure,
        same_site: SameSite::Lax,
        path: "/",
        expires,
    }
}

// ============================================================================
// Cookie Session Store
// ============================================================================

#[derive(Clone)]
pub struct SessionStore {
    codec: Arc<SessionTokenCodec>,
    secure_cookies: bool,
}

impl SessionStore {
    pub fn new(codec: Arc<SessionTokenCodec>, secure_cookies: bool) -> Self {
        Self {
            codec,
            secure_cookies,
        }
    }

    #[instrument(skip(self, jar, email))]
    pub async fn create_session(
        &self,
        jar: &dyn SessionCookieJar,
        user_id: &str,
        email: &str,
    ) -> AppResult<()> {
        let minted = self.codec.mint(user_id, email)?;
        jar.set(session_cookie(
            minted.token,
            minted.claims.expires_at,
            self.secure_cookies,
        ))
        .await?;
        info!(expires_at = %minted.claims.expires_at, "session created");
        Ok(())
    }

    /// `Ok(None)` means "not authenticated", whether the cookie is missing or
    /// fails verification. `Err` is reserved for jar failures.
    #[instrument(skip_all)]
    pub async fn get_session(
        &self,
        jar: &dyn SessionCookieJar,
    ) -> AppResult<Option<SessionClaims>> {
        let Some(token) = jar.get(SESSION_COOKIE).await? else {
            debug!("no session cookie");
            return Ok(None);
        };
        Ok(self.codec.verify(&token))
    }

    #[instrument(skip_all)]
    pub async fn delete_session(&self, jar: &dyn SessionCookieJar) -> AppResult<()> {
        jar.delete(SESSION_COOKIE).await?;
        debug!("session cookie removed");
        Ok(())
    }
}

// ============================================================================
// Request-Scoped Verifier
// ============================================================================

#[derive(Clone)]
pub struct RequestVerifier {
    codec: Arc<SessionTokenCodec>,
}

impl RequestVerifier {
    pub fn new(codec: Arc<SessionTokenCodec>) -> Self {
        Self { codec }
    }

    pub fn verify_session<R>(&self, request: &R) -> Option<SessionClaims>
    where
        R: RequestCookies + ?Sized,
    {
        let token = request.cookie_value(SESSION_COOKIE)?;
        self.codec.verify(&token)
    }
}
