//! Error types for verdict.
//!
//! A single [`Error`] enum carries the whole taxonomy:
//!
//! - classification failures ([`Error::UnrecognizedStatus`],
//!   [`Error::UnexpectedStatus`]) — the response status could not be
//!   interpreted; non-retryable protocol-level errors,
//! - decode failures ([`Error::JsonDeserialization`]) — the status was
//!   understood but the body did not match the expected shape,
//! - transport failures raised by client implementations.
//!
//! Note that a 4xx/5xx response carrying a well-formed error body is *not*
//! an `Error` — it classifies successfully as
//! [`Outcome::Error`](crate::Outcome::Error).

use derive_more::{Display, Error, From};

use crate::StatusCategory;

/// Main error type for verdict operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Status code absent from the standard status-code table.
    #[display("unrecognized status code {code}")]
    #[from(skip)]
    UnrecognizedStatus {
        /// Raw status code as received from the transport.
        #[error(not(source))]
        code: u16,
    },

    /// Status code resolved to a range with no defined handling (not 2xx/4xx/5xx).
    #[display("unexpected {category} status {code}")]
    #[from(skip)]
    UnexpectedStatus {
        /// Raw status code as received from the transport.
        code: u16,
        /// Resolved category of the status code.
        #[error(not(source))]
        category: StatusCategory,
    },

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "widget.owner.name").
        path: String,
        /// Error message.
        message: String,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the response status could not be interpreted.
    ///
    /// Covers both [`Error::UnrecognizedStatus`] (not in the standard table)
    /// and [`Error::UnexpectedStatus`] (recognized but not 2xx/4xx/5xx).
    /// These are protocol-interpretation errors; retrying will not help.
    #[must_use]
    pub const fn is_classification(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedStatus { .. } | Self::UnexpectedStatus { .. }
        )
    }

    /// Returns `true` if a body failed to decode into the expected shape.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::JsonDeserialization { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the raw status code for classification failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnrecognizedStatus { code } | Self::UnexpectedStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}
