use thiserror::Error;

/// Errors that stop the process from starting or serving.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: environment variable {var} not set")]
    ConfigMissing { var: &'static str },

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
