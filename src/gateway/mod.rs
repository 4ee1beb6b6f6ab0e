//! Submission gateway: outbound delivery of registrations

mod client;
mod error;
mod payload;
mod traits;

pub use client::HttpGateway;
pub use error::{Delivery, DeliveryResult, GatewayError};
pub use payload::SubmissionPayload;
pub use traits::SubmissionGateway;

#[cfg(test)]
pub use traits::MockSubmissionGateway;
