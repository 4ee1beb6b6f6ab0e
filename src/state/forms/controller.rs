//! Lead capture form controller
//!
//! Owns the registration data, the per-field error map and the submission
//! lifecycle. Rendering reads from it; key handling calls the edit, submit,
//! settle and reset operations. The controller never performs I/O itself:
//! `submit` hands back a [`SubmissionRequest`] and the caller reports the
//! outcome through `settle`.

use super::country::{self, DEFAULT_COUNTRY_CODE};
use super::field::{FieldName, FormStop, FORM_STOPS};
use super::form_state::{Form, SubmissionRequest, SubmissionState, SubmitOutcome};
use super::registration::RegistrationFormData;
use super::validation::{validate_form, ValidationErrors};
use crate::gateway::{Delivery, DeliveryResult};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit registration. Please try again.";

#[derive(Debug, Clone)]
pub struct LeadCaptureForm {
    data: RegistrationFormData,
    errors: ValidationErrors,
    state: SubmissionState,
    /// Snapshot of what was sent, kept for the confirmation view
    confirmation: Option<RegistrationFormData>,
    succeeded_at: Option<Instant>,
    default_country_code: String,
    pub active_field_index: usize,
}

impl LeadCaptureForm {
    pub fn new() -> Self {
        Self::with_default_country_code(DEFAULT_COUNTRY_CODE)
    }

    /// Form whose country selector starts at `code` (and returns there on reset)
    pub fn with_default_country_code(code: &str) -> Self {
        if country::find_country(code).is_none() {
            warn!("Unknown default country code {code:?}, using {DEFAULT_COUNTRY_CODE}");
        }
        let data = RegistrationFormData::with_country_code(code);
        Self {
            default_country_code: data.country_code.clone(),
            data,
            errors: ValidationErrors::new(),
            state: SubmissionState::Idle,
            confirmation: None,
            succeeded_at: None,
            active_field_index: 0,
        }
    }

    pub fn data(&self) -> &RegistrationFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn confirmation(&self) -> Option<&RegistrationFormData> {
        self.confirmation.as_ref()
    }

    /// Inputs are frozen while a request is in flight or the confirmation shows
    pub fn is_locked(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Success
        )
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.state.accepts_submit()
    }

    pub fn active_stop(&self) -> FormStop {
        FORM_STOPS[self.active_field_index.min(FORM_STOPS.len() - 1)]
    }

    // ----- field edits -----

    /// Replace a text field's value. Clears that field's error, and only that one.
    pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        let Some(slot) = self.data.text_mut(field) else {
            return false;
        };
        *slot = value.into();
        self.errors.remove(field);
        true
    }

    pub fn set_consent(&mut self, value: bool) -> bool {
        if self.is_locked() {
            return false;
        }
        self.data.consent = value;
        self.errors.remove(FieldName::Consent);
        true
    }

    pub fn toggle_consent(&mut self) -> bool {
        let value = !self.data.consent;
        self.set_consent(value)
    }

    /// Select a dialing code; codes outside the table are rejected
    pub fn set_country_code(&mut self, code: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        match country::find_country(code) {
            Some(entry) => {
                self.data.country_code = entry.code.to_string();
                true
            }
            None => false,
        }
    }

    pub fn next_country_code(&mut self) -> bool {
        let code = country::next_code(&self.data.country_code);
        self.set_country_code(code)
    }

    pub fn prev_country_code(&mut self) -> bool {
        let code = country::prev_code(&self.data.country_code);
        self.set_country_code(code)
    }

    /// Type a character into the focused stop
    pub fn input_char(&mut self, c: char) -> bool {
        match self.active_stop() {
            FormStop::Field(FieldName::Consent) if c == ' ' => self.toggle_consent(),
            FormStop::Field(field) if field.is_text() => {
                let mut value = self.data.text(field).unwrap_or_default().to_string();
                value.push(c);
                self.set_text(field, value)
            }
            _ => false,
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) -> bool {
        match self.active_stop() {
            FormStop::Field(field) if field.is_text() => {
                let mut value = self.data.text(field).unwrap_or_default().to_string();
                if value.pop().is_none() {
                    return false;
                }
                self.set_text(field, value)
            }
            _ => false,
        }
    }

    // ----- lifecycle -----

    /// Attempt to submit.
    ///
    /// From `Idle` or `Failed` this validates the current values. Any earlier
    /// failure message is cleared first. Failing validation replaces the
    /// error map and returns to `Idle`; passing moves to `Submitting` and
    /// returns the request to send.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            debug!(state = self.state.label(), "Submit ignored");
            return SubmitOutcome::Ignored;
        }
        self.state = SubmissionState::Idle;

        let errors = validate_form(&self.data);
        if !errors.is_empty() {
            let failed: Vec<_> = errors.fields().iter().map(|f| f.as_str()).collect();
            info!(?failed, "Registration failed validation");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors = errors;
        self.state = SubmissionState::Submitting;
        info!("Registration validated, submitting");

        SubmitOutcome::Ready(SubmissionRequest {
            data: self.data.clone(),
        })
    }

    /// Record the outcome of the request started by `submit`
    pub fn settle(&mut self, result: DeliveryResult) {
        if !self.state.is_submitting() {
            warn!(state = self.state.label(), "Dropping delivery result, no submission in flight");
            return;
        }

        match result {
            Ok(Delivery::SentAssumedOk) => {
                info!("Registration submitted");
                self.confirmation = Some(self.data.clone());
                self.succeeded_at = Some(Instant::now());
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                let reason = failure_reason(err.to_string());
                warn!("Registration submission failed: {reason}");
                self.state = SubmissionState::Failed(reason);
            }
        }
    }

    /// True once `Success` has been showing for at least `cooldown`
    pub fn should_auto_reset(&self, now: Instant, cooldown: Duration) -> bool {
        match (self.state.is_success(), self.succeeded_at) {
            (true, Some(at)) => now.saturating_duration_since(at) >= cooldown,
            _ => false,
        }
    }

    /// Time left before the confirmation auto-resets, while in `Success`
    pub fn reset_remaining(&self, now: Instant, cooldown: Duration) -> Option<Duration> {
        match (self.state.is_success(), self.succeeded_at) {
            (true, Some(at)) => Some(cooldown.saturating_sub(now.saturating_duration_since(at))),
            _ => None,
        }
    }

    /// Back to an empty form in `Idle`
    pub fn reset(&mut self) {
        debug!("Resetting registration form");
        self.data = RegistrationFormData::with_country_code(&self.default_country_code);
        self.errors.clear();
        self.confirmation = None;
        self.succeeded_at = None;
        self.state = SubmissionState::Idle;
        self.active_field_index = 0;
    }
}

fn failure_reason(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

impl Default for LeadCaptureForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadCaptureForm {
    fn field_count(&self) -> usize {
        FORM_STOPS.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FORM_STOPS.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;

    fn filled_form() -> LeadCaptureForm {
        let mut form = LeadCaptureForm::new();
        form.set_text(FieldName::FullName, "Jane Doe");
        form.set_text(FieldName::FirmName, "Acme Legal");
        form.set_text(FieldName::Email, "jane@acme.com");
        form.set_country_code("+91");
        form.set_text(FieldName::Whatsapp, "9876543210");
        form.set_text(FieldName::WebsiteOrLinkedIn, "https://acme.com");
        form.set_consent(true);
        form
    }

    fn focus(form: &mut LeadCaptureForm, stop: FormStop) {
        let index = FORM_STOPS.iter().position(|s| *s == stop).unwrap();
        form.set_active_field(index);
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_idle_and_empty() {
            let form = LeadCaptureForm::new();
            assert_eq!(form.state(), &SubmissionState::Idle);
            assert_eq!(form.data(), &RegistrationFormData::default());
            assert!(form.errors().is_empty());
            assert!(form.confirmation().is_none());
        }

        #[test]
        fn test_edit_clears_only_that_fields_error() {
            let mut form = LeadCaptureForm::new();
            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert!(form.error(FieldName::FullName).is_some());
            assert!(form.error(FieldName::FirmName).is_some());

            form.set_text(FieldName::FirmName, "A");

            assert!(form.error(FieldName::FirmName).is_none());
            assert_eq!(form.error(FieldName::FullName), Some("Full name is required"));
            assert_eq!(form.errors().len(), FieldName::ALL.len() - 1);
        }

        #[test]
        fn test_edit_does_not_revalidate() {
            let mut form = LeadCaptureForm::new();
            form.submit();
            // Still invalid, but the message stays hidden until the next submit
            form.set_text(FieldName::Email, "nope");
            assert!(form.error(FieldName::Email).is_none());
        }

        #[test]
        fn test_country_code_change_keeps_errors() {
            let mut form = LeadCaptureForm::new();
            form.submit();
            let before = form.errors().clone();
            assert!(form.next_country_code());
            assert_eq!(form.errors(), &before);
            assert_eq!(form.data().country_code, "+44");
        }

        #[test]
        fn test_unknown_country_code_rejected() {
            let mut form = LeadCaptureForm::new();
            assert!(!form.set_country_code("+999"));
            assert_eq!(form.data().country_code, "+1");
        }

        #[test]
        fn test_consent_toggle_clears_consent_error() {
            let mut form = filled_form();
            form.set_consent(false);
            form.submit();
            assert!(form.error(FieldName::Consent).is_some());
            form.toggle_consent();
            assert!(form.data().consent);
            assert!(form.error(FieldName::Consent).is_none());
        }

        #[test]
        fn test_input_char_and_backspace_on_focused_field() {
            let mut form = LeadCaptureForm::new();
            focus(&mut form, FormStop::Field(FieldName::Email));
            for c in "ab".chars() {
                assert!(form.input_char(c));
            }
            assert_eq!(form.data().email, "ab");
            assert!(form.backspace());
            assert_eq!(form.data().email, "a");
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = LeadCaptureForm::new();
            form.submit();
            assert!(!form.backspace());
            // No edit happened, so the error is still there
            assert!(form.error(FieldName::FullName).is_some());
        }

        #[test]
        fn test_space_toggles_consent_when_focused() {
            let mut form = LeadCaptureForm::new();
            focus(&mut form, FormStop::Field(FieldName::Consent));
            assert!(form.input_char(' '));
            assert!(form.data().consent);
            assert!(!form.input_char('x'));
        }

        #[test]
        fn test_typing_on_country_or_submit_stop_is_ignored() {
            let mut form = LeadCaptureForm::new();
            focus(&mut form, FormStop::CountryCode);
            assert!(!form.input_char('4'));
            focus(&mut form, FormStop::Submit);
            assert!(!form.input_char('a'));
            assert_eq!(form.data(), &RegistrationFormData::default());
        }

        #[test]
        fn test_focus_cycles_through_all_stops() {
            let mut form = LeadCaptureForm::new();
            assert_eq!(form.active_stop(), FormStop::Field(FieldName::FullName));
            form.prev_field();
            assert_eq!(form.active_stop(), FormStop::Submit);
            form.next_field();
            assert_eq!(form.active_stop(), FormStop::Field(FieldName::FullName));
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_keeps_state_and_sends_nothing() {
            let mut form = LeadCaptureForm::new();
            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert_eq!(form.state(), &SubmissionState::Idle);
        }

        #[test]
        fn test_consent_missing_shows_exactly_consent_error() {
            let mut form = filled_form();
            form.set_consent(false);
            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert_eq!(form.errors().fields(), vec![FieldName::Consent]);
            assert_eq!(form.state(), &SubmissionState::Idle);
        }

        #[test]
        fn test_invalid_submit_replaces_errors_wholesale() {
            let mut form = LeadCaptureForm::new();
            form.submit();
            form.set_text(FieldName::FullName, "Jane Doe");
            form.set_text(FieldName::FirmName, "Acme");
            form.submit();
            assert!(form.error(FieldName::FullName).is_none());
            assert!(form.error(FieldName::FirmName).is_none());
            assert!(form.error(FieldName::Email).is_some());
        }

        #[test]
        fn test_valid_submit_moves_to_submitting() {
            let mut form = filled_form();
            match form.submit() {
                SubmitOutcome::Ready(request) => {
                    assert_eq!(request.data, *form.data());
                    assert_eq!(request.data.full_whatsapp(), "+919876543210");
                }
                other => panic!("expected Ready, got {other:?}"),
            }
            assert_eq!(form.state(), &SubmissionState::Submitting);
            assert!(form.errors().is_empty());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_second_submit_while_in_flight_is_ignored() {
            let mut form = filled_form();
            assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
            assert_eq!(form.submit(), SubmitOutcome::Ignored);
            assert_eq!(form.state(), &SubmissionState::Submitting);
        }

        #[test]
        fn test_edits_ignored_while_submitting() {
            let mut form = filled_form();
            form.submit();
            assert!(!form.set_text(FieldName::FullName, "Other"));
            assert!(!form.toggle_consent());
            assert!(!form.next_country_code());
            assert_eq!(form.data().full_name, "Jane Doe");
        }
    }

    mod settling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_captures_confirmation() {
            let mut form = filled_form();
            form.submit();
            form.settle(Ok(Delivery::SentAssumedOk));
            assert_eq!(form.state(), &SubmissionState::Success);
            assert_eq!(form.confirmation(), Some(form.data()));
            assert_eq!(form.submit(), SubmitOutcome::Ignored);
        }

        #[test]
        fn test_failure_keeps_fields_byte_for_byte() {
            let mut form = filled_form();
            form.set_text(FieldName::Whatsapp, " 98765 43210 ");
            let before = form.data().clone();
            form.submit();
            form.settle(Err(GatewayError::Transport("connection reset".into())));

            assert_eq!(
                form.state(),
                &SubmissionState::Failed("Failed to send registration: connection reset".into())
            );
            assert_eq!(form.data(), &before);
            assert!(form.confirmation().is_none());
        }

        #[test]
        fn test_missing_endpoint_reason() {
            let mut form = filled_form();
            form.submit();
            form.settle(Err(GatewayError::MissingEndpoint));
            let message = form.state().failure_message().unwrap();
            assert!(message.contains("not configured"));
        }

        #[test]
        fn test_blank_reason_uses_generic_fallback() {
            assert_eq!(failure_reason("  ".to_string()), GENERIC_FAILURE_MESSAGE);
            assert_eq!(failure_reason("boom".to_string()), "boom");
        }

        #[test]
        fn test_retry_from_failed() {
            let mut form = filled_form();
            form.submit();
            form.settle(Err(GatewayError::Transport("timeout".into())));
            assert!(form.can_submit());
            assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
            assert_eq!(form.state(), &SubmissionState::Submitting);
        }

        #[test]
        fn test_failed_message_survives_edits() {
            let mut form = filled_form();
            form.submit();
            form.settle(Err(GatewayError::Transport("timeout".into())));
            form.set_text(FieldName::FirmName, "Acme Legal LLP");
            assert!(form.state().failure_message().is_some());
        }

        #[test]
        fn test_invalid_retry_clears_failure_message() {
            let mut form = filled_form();
            form.submit();
            form.settle(Err(GatewayError::Transport("connection refused".into())));
            form.set_text(FieldName::Email, "broken");

            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert_eq!(form.state(), &SubmissionState::Idle);
            assert!(form.state().failure_message().is_none());
            assert_eq!(
                form.error(FieldName::Email),
                Some("Please enter a valid email address")
            );
            assert!(form.can_submit());
        }

        #[test]
        fn test_settle_without_submission_is_ignored() {
            let mut form = filled_form();
            form.settle(Ok(Delivery::SentAssumedOk));
            assert_eq!(form.state(), &SubmissionState::Idle);
            assert!(form.confirmation().is_none());
        }
    }

    mod resetting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = LeadCaptureForm::with_default_country_code("+44");
            form.set_text(FieldName::FullName, "Jane Doe");
            form.next_country_code();
            form.submit();
            form.reset();

            assert_eq!(form.state(), &SubmissionState::Idle);
            assert_eq!(form.data(), &RegistrationFormData::with_country_code("+44"));
            assert!(form.errors().is_empty());
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_reset_after_success_clears_confirmation() {
            let mut form = filled_form();
            form.submit();
            form.settle(Ok(Delivery::SentAssumedOk));
            form.reset();
            assert!(form.confirmation().is_none());
            assert!(form.can_submit());
        }

        #[test]
        fn test_auto_reset_after_cooldown() {
            let mut form = filled_form();
            form.submit();
            form.settle(Ok(Delivery::SentAssumedOk));
            let now = Instant::now();
            assert!(!form.should_auto_reset(now, Duration::from_secs(60)));
            assert!(form.should_auto_reset(
                now + Duration::from_secs(61),
                Duration::from_secs(60)
            ));
        }

        #[test]
        fn test_no_auto_reset_unless_success() {
            let form = filled_form();
            assert!(!form.should_auto_reset(
                Instant::now() + Duration::from_secs(3600),
                Duration::ZERO
            ));
        }

        #[test]
        fn test_reset_remaining_counts_down() {
            let mut form = filled_form();
            assert_eq!(form.reset_remaining(Instant::now(), Duration::from_secs(10)), None);

            form.submit();
            form.settle(Ok(Delivery::SentAssumedOk));
            let later = Instant::now() + Duration::from_secs(60);
            assert_eq!(
                form.reset_remaining(later, Duration::from_secs(10)),
                Some(Duration::ZERO)
            );
        }

        #[test]
        fn test_unknown_default_falls_back() {
            let form = LeadCaptureForm::with_default_country_code("+999");
            assert_eq!(form.data().country_code, "+1");
        }
    }
}
