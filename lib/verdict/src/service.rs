//! Service client wrapper.
//!
//! [`ServiceClient`] pairs an [`HttpClient`] with a downstream service's
//! base URL. Every verb helper executes the request and hands the completed
//! response straight to [`Response::classify`](verdict_core::Response),
//! so callers receive a classified [`Outcome`] rather than a raw response.
//!
//! # Example
//!
//! ```ignore
//! use verdict::{HyperClient, Outcome, ServiceClient};
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct Widget { id: u64 }
//!
//! let service = ServiceClient::new(HyperClient::new(), "https://widgets.internal")?;
//! match service.get::<Widget>("/widgets/7").await? {
//!     Outcome::Success(widget) => println!("{widget:?}"),
//!     Outcome::Error(payload) => eprintln!("{payload}"),
//! }
//! ```

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Error, HttpClient, Method, Outcome, Request, Result};

/// A downstream service client: base URL plus HTTP execution.
///
/// The same underlying client (with its connection pool and middleware) can
/// be shared across several services:
///
/// ```ignore
/// let http = HyperClient::builder().with_logging().build();
/// let accounts = ServiceClient::new(http.clone(), "https://accounts.internal")?;
/// let billing = ServiceClient::new(http, "https://billing.internal")?;
/// ```
#[derive(Debug)]
pub struct ServiceClient<C> {
    client: C,
    base_url: Url,
}

impl<C: Clone> Clone for ServiceClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<C> ServiceClient<C> {
    /// Create a new service client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?,
        })
    }

    /// Create a new service client with a pre-parsed URL.
    #[must_use]
    pub fn with_url(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Base URL of the downstream service.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Resolve a path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }
}

impl<C: HttpClient> ServiceClient<C> {
    /// Execute a prebuilt request and classify the response.
    ///
    /// # Errors
    ///
    /// Transport errors from the client, and classification or decode
    /// errors from [`Response::classify`](verdict_core::Response::classify).
    pub async fn send<T: DeserializeOwned>(&self, request: Request<Bytes>) -> Result<Outcome<T>> {
        let response = self.client.execute(request).await?;
        response.classify()
    }

    /// GET a path and classify the response.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Outcome<T>> {
        let request = Request::builder(Method::Get, self.endpoint(path)?)
            .header("Accept", "application/json")
            .build();
        self.send(request).await
    }

    /// POST a JSON body to a path and classify the response.
    ///
    /// # Errors
    ///
    /// Serialization errors, and see [`ServiceClient::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Outcome<T>>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = Request::builder(Method::Post, self.endpoint(path)?)
            .json(body)?
            .build();
        self.send(request).await
    }

    /// PUT a JSON body to a path and classify the response.
    ///
    /// # Errors
    ///
    /// Serialization errors, and see [`ServiceClient::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Outcome<T>>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = Request::builder(Method::Put, self.endpoint(path)?)
            .json(body)?
            .build();
        self.send(request).await
    }

    /// DELETE a path and classify the response.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Outcome<T>> {
        let request = Request::builder(Method::Delete, self.endpoint(path)?).build();
        self.send(request).await
    }
}
