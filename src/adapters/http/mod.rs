pub mod app_error_impl;
pub mod app_state;
pub mod cookie_jar;
pub mod middleware;
pub mod request_cookies;
pub mod routes;
