use thiserror::Error;

/// Startup and listener failures
///
/// Anything here ends the process with a non-zero status.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result alias for bootstrap code
pub type Result<T> = std::result::Result<T, ServerError>;
