use thiserror::Error;

/// Top-level server errors surfaced from [`crate::core::Server::run`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for server startup and shutdown paths
pub type Result<T> = std::result::Result<T, ServerError>;
