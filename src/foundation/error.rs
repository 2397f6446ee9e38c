use std::path::{Path, PathBuf};

/// Convenience result type used across manual-track.
pub type TrackResult<T> = Result<T, TrackError>;

/// Top-level error taxonomy used by tracker APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrackError {
    /// Invalid user-provided data (scripts, command-line options, settings files).
    #[error("validation error: {0}")]
    Validation(String),

    /// A pose log line that does not hold six integer fields.
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number inside the log.
        line: usize,
        /// What was wrong with the line.
        msg: String,
    },

    /// Platform I/O failure on the pose log or an export target.
    #[error("io error while trying to {op} '{}': {source}", path.display())]
    Io {
        /// Short description of the attempted operation.
        op: &'static str,
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying platform error.
        #[source]
        source: std::io::Error,
    },

    /// The pose log stream is closed (a previous open failed).
    #[error("pose log '{}' is not open", .0.display())]
    LogClosed(PathBuf),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackError {
    /// Build a [`TrackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrackError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// Build a [`TrackError::Io`] value.
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a [`TrackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
