//! Status code resolution.
//!
//! [`StatusCategory::resolve`] turns a raw status code into its semantic
//! category by a strict lookup against the standard status-code table.
//! Codes the table does not know (999, 299, anything outside 100-999) are
//! rejected up front, before any body handling.

use derive_more::Display;
use http::StatusCode;

use crate::{Error, Result};

/// Semantic category of a resolved HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusCategory {
    /// 1xx range.
    #[display("informational")]
    Informational,
    /// 2xx range.
    #[display("success")]
    Success,
    /// 3xx range.
    #[display("redirection")]
    Redirection,
    /// 4xx range.
    #[display("client error")]
    ClientError,
    /// 5xx range.
    #[display("server error")]
    ServerError,
}

impl StatusCategory {
    /// Resolve a raw status code against the standard status-code table.
    ///
    /// The lookup is strict: a code is recognized only if it carries a
    /// canonical reason phrase in the table. A plain range check would
    /// accept made-up codes like 299 or 599.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedStatus`] for codes absent from the table.
    pub fn resolve(code: u16) -> Result<Self> {
        let status =
            StatusCode::from_u16(code).map_err(|_| Error::UnrecognizedStatus { code })?;
        if status.canonical_reason().is_none() {
            return Err(Error::UnrecognizedStatus { code });
        }

        let category = if status.is_informational() {
            Self::Informational
        } else if status.is_success() {
            Self::Success
        } else if status.is_redirection() {
            Self::Redirection
        } else if status.is_client_error() {
            Self::ClientError
        } else {
            Self::ServerError
        };
        Ok(category)
    }

    /// Returns `true` for the 2xx category.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for the 4xx and 5xx categories.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::ClientError | Self::ServerError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_common_codes() {
        assert_eq!(
            StatusCategory::resolve(100).expect("100"),
            StatusCategory::Informational
        );
        assert_eq!(
            StatusCategory::resolve(200).expect("200"),
            StatusCategory::Success
        );
        assert_eq!(
            StatusCategory::resolve(204).expect("204"),
            StatusCategory::Success
        );
        assert_eq!(
            StatusCategory::resolve(301).expect("301"),
            StatusCategory::Redirection
        );
        assert_eq!(
            StatusCategory::resolve(404).expect("404"),
            StatusCategory::ClientError
        );
        assert_eq!(
            StatusCategory::resolve(503).expect("503"),
            StatusCategory::ServerError
        );
    }

    #[test]
    fn resolve_is_a_table_lookup_not_a_range_check() {
        // In range for the http crate, but not present in the standard table.
        for code in [299, 399, 499, 599, 999] {
            let err = StatusCategory::resolve(code).expect_err("not in table");
            assert!(
                matches!(err, Error::UnrecognizedStatus { code: c } if c == code),
                "expected unrecognized status for {code}, got: {err}"
            );
        }
    }

    #[test]
    fn resolve_out_of_range() {
        for code in [0, 42, 99, 1000, u16::MAX] {
            let err = StatusCategory::resolve(code).expect_err("out of range");
            assert!(err.is_classification());
        }
    }

    #[test]
    fn category_predicates() {
        assert!(StatusCategory::Success.is_success());
        assert!(!StatusCategory::Success.is_error());
        assert!(StatusCategory::ClientError.is_error());
        assert!(StatusCategory::ServerError.is_error());
        assert!(!StatusCategory::Informational.is_error());
        assert!(!StatusCategory::Redirection.is_success());
    }

    #[test]
    fn category_display() {
        assert_eq!(StatusCategory::Informational.to_string(), "informational");
        assert_eq!(StatusCategory::Redirection.to_string(), "redirection");
        assert_eq!(StatusCategory::ClientError.to_string(), "client error");
    }
}
