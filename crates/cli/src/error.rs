use std::path::PathBuf;

/// Picket error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact bag could not be parsed or a record is missing a required field
    #[error("artifact error: {message}")]
    Artifact { message: String },

    /// An audit requires an artifact the gatherer did not supply
    #[error("missing required artifact: {name}")]
    MissingArtifact { name: &'static str },

    /// An optimized-image candidate has no rendered element with a matching src
    #[error("no image element matches candidate url: {url}")]
    UnmatchedImage { url: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using picket Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All audits passed
    Success = 0,
    /// One or more audits failed
    AuditFailed = 1,
    /// Configuration, argument, or artifact error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Artifact { .. } => ExitCode::ConfigError,
            Error::MissingArtifact { .. } | Error::UnmatchedImage { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
