//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Error, ErrorPayload, HttpClient, HyperClient, Method, Outcome, Request,
    RequestBuilder, Response, Result, ServiceClient, StatusCategory, Telemetry, from_json, to_json,
};
pub use serde::{Deserialize, Serialize};
