//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict_core::prelude::*;
//! ```

pub use crate::{
    Error, ErrorPayload, HttpClient, Method, Outcome, Request, RequestBuilder, Response, Result,
    StatusCategory, from_json, to_json,
};
