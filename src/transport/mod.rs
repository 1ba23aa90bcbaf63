//! The remote-call collaborator the client consumes.
//!
//! The client never talks to the service directly: it hands an
//! operation name and an argument map to a [`Transport`] and gets back
//! the decoded response envelope. [`HttpTransport`] is the production
//! implementation; tests inject scripted stand-ins.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

pub mod http;


pub use http::HttpTransport;

/// Arguments of one remote call, keyed by the service's wire names.
pub type CallArgs = Map<String, Value>;

/// The decoded top-level response of one remote call.
pub type Envelope = Map<String, Value>;

/// Default service location, the original endpoint without its `?WSDL`
/// query.
pub const DEFAULT_ENDPOINT: &str = "https://www.openligadb.de/Webservices/Sportsdata.asmx";

/// Failures raised before any response payload reaches the binder.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connectivity failure or an error status from the service.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded, but not to an object usable as an envelope.
    #[error("response is not an envelope object")]
    NotAnEnvelope { body: Value },
}

/// A collaborator that performs one named remote call.
///
/// Implementations own endpoint location, deadlines and wire encoding;
/// the caller only sees the decoded envelope or a [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, operation: &str, arguments: &CallArgs)
        -> Result<Envelope, TransportError>;
}

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL operations are POSTed under.
    pub endpoint: String,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
    /// Deadline for the whole call, connect included.
    pub request_timeout: Duration,
    /// Value sent as the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("openligadb/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
