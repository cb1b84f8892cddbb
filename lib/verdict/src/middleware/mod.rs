//! Tower middleware layers for the verdict HTTP client.
//!
//! Layers compose over the boxed client service via
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer). The
//! classification core never logs or retries by contract; request
//! observability belongs here, at the transport seam.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for middleware composition
pub use tower::{Layer, ServiceBuilder};
