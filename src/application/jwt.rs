use std::sync::Arc;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::app_error::{AppError, AppResult};
use crate::application::ports::Clock;
use crate::infra::InfraError;

/// How long a freshly minted session stays valid.
pub const SESSION_LIFETIME: Duration = Duration::days(7);

// ============================================================================
// Session Claims
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

/// What actually goes into the token body. `iat`/`exp` mirror the registered
/// JWT claims for outside tooling; `expiresAt` is what expiry is decided on.
#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    #[serde(flatten)]
    claims: SessionClaims,
    iat: i64,
    exp: i64,
}

#[derive(Debug)]
pub struct MintedSession {
    pub token: String,
    pub claims: SessionClaims,
}

/// Internal reason a token was refused. Only ever logged; callers get `None`.
#[derive(Debug, Error)]
enum Rejection {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("signature mismatch")]
    BadSignature,

    #[error("token expired")]
    Expired,
}

// ============================================================================
// Codec
// ============================================================================

/// Mints and verifies HS256 session tokens with the process-wide secret.
///
/// The HMAC tag comparison inside `jsonwebtoken` is constant-time.
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl SessionTokenCodec {
    /// Fails when the secret is empty. Called once at startup.
    pub fn new(secret: &SecretString, clock: Arc<dyn Clock>) -> Result<Self, InfraError> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(InfraError::ConfigMissing { var: "JWT_SECRET" });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // exp is checked against `clock` in `decode`, not the system time.
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        })
    }

    pub fn mint(&self, user_id: &str, email: &str) -> AppResult<MintedSession> {
        if user_id.is_empty() || email.is_empty() {
            return Err(AppError::InvalidInput(
                "user id and email are required".into(),
            ));
        }

        let now = self.clock.now();
        let claims = SessionClaims {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
            expires_at: now + SESSION_LIFETIME,
        };
        let payload = TokenPayload {
            claims: claims.clone(),
            iat: now.unix_timestamp(),
            exp: claims.expires_at.unix_timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(MintedSession { token, claims })
    }

    /// Returns the claims only for an authentic, unexpired token.
    ///
    /// A token counts as expired once `now >= expiresAt`.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match self.decode(token) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                debug!(%reason, "session token rejected");
                None
            }
        }
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, Rejection> {
        let payload = decode::<TokenPayload>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => Rejection::BadSignature,
                _ => Rejection::Malformed(e.to_string()),
            })?
            .claims;

        let claims = payload.claims;
        if claims.user_id.is_empty() || claims.email.is_empty() {
            return Err(Rejection::Malformed("empty identity claims".into()));
        }
        if payload.exp != claims.expires_at.unix_timestamp() {
            return Err(Rejection::Malformed("exp does not match expiresAt".into()));
        }
        if self.clock.now() >= claims.expires_at {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }
}
