use axum::http::{HeaderMap, Request, request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::application::ports::RequestCookies;

/// Parses every `Cookie` header with the same parser the `CookieJar`
/// extractor uses, so raw-request reads match jar reads.
impl RequestCookies for HeaderMap {
    fn cookie_value(&self, name: &str) -> Option<String> {
        CookieJar::from_headers(self)
            .get(name)
            .map(|cookie| cookie.value().to_owned())
    }
}

impl<B> RequestCookies for Request<B> {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.headers().cookie_value(name)
    }
}

impl RequestCookies for Parts {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.headers.cookie_value(name)
    }
}
