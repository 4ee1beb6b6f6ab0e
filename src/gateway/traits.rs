//! Trait abstraction for the submission gateway to enable mocking in tests

use super::error::DeliveryResult;
use super::payload::SubmissionPayload;
use async_trait::async_trait;

/// Sends one registration per call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver `payload` with a single request.
    ///
    /// `Ok` only means the request went out; the endpoint's response is never
    /// read.
    async fn deliver(&self, payload: &SubmissionPayload) -> DeliveryResult;

    /// Whether an endpoint is configured at all
    fn is_configured(&self) -> bool;
}
