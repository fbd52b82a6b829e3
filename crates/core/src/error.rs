use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// A failed remote fetch and a too-short trend window are handled where
/// they occur and rendered as "N/A"; neither appears here.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("config error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = DashError> = std::result::Result<T, E>;
