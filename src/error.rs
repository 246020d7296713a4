//! Library error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning task data into scores
#[derive(Debug, Error)]
pub enum Error {
    /// A task record lacks one of the attributes scoring reads
    #[error("task record is missing required attribute `{0}`")]
    MissingAttribute(&'static str),

    /// A timestamp field could not be parsed
    #[error("invalid timestamp for `{field}`: {value}")]
    InvalidTimestamp {
        /// Field name (`due_date` or `updated_at`)
        field: &'static str,
        /// The raw value that failed to parse
        value: String,
    },

    /// A record inside a task file was rejected
    #[error("task #{index}: {source}")]
    Record {
        /// 1-based position of the record in its file
        index: usize,
        /// Why the record was rejected
        #[source]
        source: Box<Self>,
    },

    /// Reading a file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML input was malformed
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML output could not be produced
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON input was malformed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No task carries the requested identifier
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

/// Result alias using the library [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Strip any [`Error::Record`] wrappers and return the underlying cause
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Record { source, .. } => source.root(),
            other => other,
        }
    }
}
