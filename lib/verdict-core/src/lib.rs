//! Core types for verdict, a response-classification helper for HTTP
//! service clients.
//!
//! This crate is transport-independent and performs no I/O. It provides:
//! - [`StatusCategory`] - strict status resolution against the standard table
//! - [`Outcome`] and [`Response::classify`] - the classification core
//! - [`ErrorPayload`] - the shared 4xx/5xx error body shape
//! - [`Error`] and [`Result`] - the error taxonomy
//! - [`Request`] and [`Response`] - request/response models
//! - [`HttpClient`] - the execution seam for transports

mod body;
mod client;
mod error;
mod outcome;
mod payload;
pub mod prelude;
mod request;
mod response;
mod status;

pub use body::{from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use payload::ErrorPayload;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use status::StatusCategory;
