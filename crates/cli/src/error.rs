use std::path::PathBuf;

/// Gatecheck error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Artifact file missing or unparseable
    #[error("artifact error: {}: {message}", .path.display())]
    Artifact { message: String, path: PathBuf },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Configuration error without an associated file.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Configuration error pointing at a file.
    pub fn config_in(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Artifact error pointing at the offending artifact file.
    pub fn artifact(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Artifact {
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Result type using gatecheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All checks passed (warn-severity failures allowed)
    Success = 0,
    /// One or more checks failed or errored
    CheckFailed = 1,
    /// Configuration or artifact error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Artifact { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
