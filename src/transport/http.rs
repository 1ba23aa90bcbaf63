//! JSON-over-HTTP production transport.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

use super::{CallArgs, Envelope, Transport, TransportConfig, TransportError};

#[cfg(test)]
mod tests;

/// Production transport that POSTs each operation's argument map as
/// JSON to `{endpoint}/{operation}` and decodes the response body as
/// the envelope.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport from explicit connection settings.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint calls are addressed to, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        operation: &str,
        arguments: &CallArgs,
    ) -> Result<Envelope, TransportError> {
        let url = format!("{}/{}", self.endpoint, operation);
        let before = Instant::now();

        let body = self
            .client
            .post(&url)
            .json(arguments)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("call {url} {:.2?}", before.elapsed());

        let value: Value = serde_json::from_str(&body)?;
        match value {
            Value::Object(envelope) => Ok(envelope),
            other => Err(TransportError::NotAnEnvelope { body: other }),
        }
    }
}
