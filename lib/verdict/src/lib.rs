//! Response classification for HTTP service clients.
//!
//! A downstream response is interpreted in exactly one of three ways: a
//! decoded success payload, a decoded structured error payload, or a
//! classification failure. This crate pairs the transport-independent core
//! from `verdict-core` with a hyper-based client so the classification can
//! run against real services.
//!
//! # Example
//!
//! ```ignore
//! use verdict::{HyperClient, Outcome, ServiceClient, Telemetry};
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct Widget {
//!     id: u64,
//! }
//!
//! Telemetry::new("widget-consumer").init()?;
//!
//! let http = HyperClient::builder().with_logging().build();
//! let service = ServiceClient::new(http, "https://widgets.internal")?;
//!
//! match service.get::<Widget>("/widgets/7").await? {
//!     Outcome::Success(widget) => println!("got {widget:?}"),
//!     Outcome::Error(payload) => eprintln!("service said no: {payload}"),
//! }
//! ```

mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
mod service;
mod telemetry;

// Re-export client types
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use service::ServiceClient;
pub use telemetry::Telemetry;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use verdict_core::{
    Error, ErrorPayload, HttpClient, Method, Outcome, Request, RequestBuilder, Response, Result,
    StatusCategory, from_json, to_json,
};
