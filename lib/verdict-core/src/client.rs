//! HTTP client trait.
//!
//! [`HttpClient`] is the seam between the classification core and whatever
//! actually moves bytes. Production code uses the hyper implementation from
//! the `verdict` crate; tests can substitute an in-memory transport.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP execution trait.
///
/// Implementations are expected to be async, to buffer the response body,
/// and to surface transport problems through [`crate::Error`].
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the completed response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - network errors
    /// - TLS errors
    /// - timeouts
    /// - invalid request
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
