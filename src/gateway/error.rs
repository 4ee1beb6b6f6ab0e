//! Delivery outcome types

use thiserror::Error;

/// Successful delivery.
///
/// The endpoint does not give back a readable response, so the only thing a
/// sender can know is that the request went out without a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    SentAssumedOk,
}

/// Why a registration could not be sent
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No endpoint configured; raised before any network I/O
    #[error("Submission endpoint is not configured. Set GROWDIT_SUBMISSION_URL or submission_endpoint in config.json.")]
    MissingEndpoint,

    /// The request could not be sent or did not complete
    #[error("Failed to send registration: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Build a transport error carrying the innermost cause as well
    pub fn transport(err: &reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message = format!("{message}: {cause}");
            source = cause.source();
        }
        Self::Transport(message)
    }
}

pub type DeliveryResult = Result<Delivery, GatewayError>;
