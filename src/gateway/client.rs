//! HTTP client for the spreadsheet-backed submission endpoint
//!
//! The endpoint is a cross-origin script that never returns a response the
//! caller can rely on. A request that completes at the transport level is
//! reported as [`Delivery::SentAssumedOk`]; the status and body are not used
//! to decide success.

use super::error::{Delivery, DeliveryResult, GatewayError};
use super::payload::SubmissionPayload;
use super::traits::SubmissionGateway;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Gateway that POSTs JSON to a configured URL
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpGateway {
    /// Create a gateway for `endpoint`; blank values count as missing
    pub fn new(endpoint: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a gateway using a preconfigured client
    pub fn with_client(client: reqwest::Client, endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn deliver(&self, payload: &SubmissionPayload) -> DeliveryResult {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("Submission attempted without a configured endpoint");
            return Err(GatewayError::MissingEndpoint);
        };

        debug!(%endpoint, "Sending registration");

        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Registration request failed: {e}");
                GatewayError::transport(&e)
            })?;

        // Status is informational only; the body is never read
        debug!(status = %response.status(), "Registration request completed");
        info!("Registration sent");

        Ok(Delivery::SentAssumedOk)
    }

    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}
