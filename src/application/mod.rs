pub mod app_error;
pub mod jwt;
pub mod ports;
pub mod session;
pub mod tool_label;
