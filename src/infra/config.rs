use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    /// HS256 signing secret for session tokens. Must be non-empty.
    pub jwt_secret: SecretString,
    /// Adds `Secure` to the session cookie. On when `APP_ENV=production`.
    pub secure_cookies: bool,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret: SecretString = SecretString::new(get_env::<String>("JWT_SECRET").into());

        let app_env: String = get_env_default("APP_ENV", "development".to_string());
        let secure_cookies = app_env.eq_ignore_ascii_case("production");

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        Self {
            jwt_secret,
            secure_cookies,
            bind_addr,
            cors_origin,
        }
    }
}
