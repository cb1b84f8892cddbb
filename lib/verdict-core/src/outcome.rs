//! Response classification.
//!
//! [`Response::classify`] interprets a completed downstream response as
//! either a decoded success payload or a decoded [`ErrorPayload`]:
//!
//! ```
//! use std::collections::HashMap;
//! use bytes::Bytes;
//! use verdict_core::{Outcome, Response};
//!
//! #[derive(Debug, PartialEq, serde::Deserialize)]
//! struct Widget { id: u64 }
//!
//! let response = Response::new(200, HashMap::new(), Bytes::from(r#"{"id":7}"#));
//! let outcome = response.classify::<Widget>().expect("classify");
//! assert_eq!(outcome, Outcome::Success(Widget { id: 7 }));
//! ```
//!
//! A 4xx/5xx response with a well-formed body is a *successful*
//! classification whose payload happens to represent an application-level
//! error; only the caller decides what to do with it (retry, surface, map
//! to a domain error).

use bytes::Bytes;

use crate::{ErrorPayload, Response, Result, StatusCategory};

/// Tagged result of classifying a downstream response.
///
/// Statuses the classifier cannot interpret, and bodies that fail to
/// decode, are reported through [`crate::Error`] instead — see
/// [`Error::is_classification`](crate::Error::is_classification) and
/// [`Error::is_decode`](crate::Error::is_decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 2xx response, body decoded as the expected payload type.
    Success(T),
    /// 4xx/5xx response, body decoded as the shared error shape.
    Error(ErrorPayload),
}

impl<T> Outcome<T> {
    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns the error payload, if any.
    #[must_use]
    pub fn error(self) -> Option<ErrorPayload> {
        match self {
            Self::Success(_) => None,
            Self::Error(payload) => Some(payload),
        }
    }

    /// Transform the success payload with a function.
    pub fn map<F, U>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Error(payload) => Outcome::Error(payload),
        }
    }
}

impl Response<Bytes> {
    /// Classify this response and decode its body, consuming the response.
    ///
    /// The status code is resolved against the standard status-code table
    /// first; exactly one decode is attempted afterwards, chosen by the
    /// resolved category:
    ///
    /// - 2xx: the body decodes as `T`, yielding [`Outcome::Success`],
    /// - 4xx/5xx: the body decodes as [`ErrorPayload`], yielding
    ///   [`Outcome::Error`],
    /// - anything else fails before the body is touched.
    ///
    /// # Errors
    ///
    /// - [`Error::UnrecognizedStatus`](crate::Error::UnrecognizedStatus) if
    ///   the status code is not in the standard table,
    /// - [`Error::UnexpectedStatus`](crate::Error::UnexpectedStatus) if it
    ///   resolved to a 1xx/3xx category,
    /// - a decode error if the chosen decode fails; never reclassified as a
    ///   different status category.
    pub fn classify<T: serde::de::DeserializeOwned>(self) -> Result<Outcome<T>> {
        let category = StatusCategory::resolve(self.status())?;
        if category.is_success() {
            self.json().map(Outcome::Success)
        } else if category.is_error() {
            self.json().map(Outcome::Error)
        } else {
            Err(crate::Error::UnexpectedStatus {
                code: self.status(),
                category,
            })
        }
    }
}
