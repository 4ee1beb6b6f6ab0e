//! Form navigation and submission lifecycle types

use super::registration::RegistrationFormData;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight; submitting again is a no-op
    Submitting,
    /// Terminal until the form is reset
    Success,
    /// Last attempt failed with a user-facing reason
    Failed(String),
}

impl SubmissionState {
    /// Whether a submit attempt may start from this state
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Form-level message for the failed state
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed(_) => "failed",
        }
    }
}

/// Validated data ready to hand to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub data: RegistrationFormData,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the caller must send the request
    Ready(SubmissionRequest),
    /// Validation failed; errors were replaced and nothing was sent
    Invalid,
    /// A submission is in flight or already succeeded
    Ignored,
}
