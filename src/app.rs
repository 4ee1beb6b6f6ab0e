//! Application state and core logic

use crate::config::GrowditConfig;
use crate::gateway::{DeliveryResult, HttpGateway, SubmissionGateway, SubmissionPayload};
use crate::platform::is_submit_shortcut;
use crate::state::{
    AppState, Form, FormStop, LeadCaptureForm, SubmissionRequest, SubmitOutcome, View,
    DEFAULT_COUNTRY_CODE,
};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated registrations go
    gateway: Arc<dyn SubmissionGateway>,
    /// Pass-through fields added to every payload
    extra_fields: BTreeMap<String, String>,
    /// How long the confirmation stays before the form resets
    reset_cooldown: Duration,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Last known (height, width), refreshed before each draw
    pub terminal_size: Option<(u16, u16)>,
    quit: bool,
    results_tx: UnboundedSender<DeliveryResult>,
    results_rx: UnboundedReceiver<DeliveryResult>,
}

impl App {
    /// Create an App that posts to the configured endpoint
    pub fn new(config: &GrowditConfig) -> Self {
        let gateway = HttpGateway::new(config.submission_endpoint());
        match gateway.endpoint() {
            Some(url) => info!("Submitting registrations to {url}"),
            None => info!("No submission endpoint configured"),
        }
        Self::with_gateway(Arc::new(gateway), config)
    }

    pub fn with_gateway(gateway: Arc<dyn SubmissionGateway>, config: &GrowditConfig) -> Self {
        let country = config
            .default_country_code
            .as_deref()
            .unwrap_or(DEFAULT_COUNTRY_CODE);
        let (results_tx, results_rx) = unbounded_channel();

        Self {
            state: AppState::with_registration(LeadCaptureForm::with_default_country_code(
                country,
            )),
            gateway,
            extra_fields: config.extra_fields.clone(),
            reset_cooldown: config.reset_cooldown(),
            status_message: None,
            terminal_size: None,
            quit: false,
            results_tx,
            results_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn endpoint_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Countdown for the confirmation dialog
    pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
        self.state
            .registration
            .reset_remaining(now, self.reset_cooldown)
    }

    fn landing_max_scroll(&self) -> u16 {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        crate::ui::landing_max_scroll(height, width)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // So is the confirmation
        if self.state.registration.confirmation().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.reset_registration();
            }
            return;
        }

        self.status_message = None;

        if !self.state.current_view.is_form_view() && self.handle_global_key(key) {
            return;
        }

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Register => self.handle_register_key(key),
        }
    }

    /// View switching and quit; returns true when the key was consumed
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let target = match key.code {
            KeyCode::Char('1') | KeyCode::Char('h') => View::Landing,
            KeyCode::Char('2') | KeyCode::Char('f') => View::Faq,
            KeyCode::Char('3') | KeyCode::Char('r') => View::Register,
            KeyCode::Char('q') => {
                self.quit = true;
                return true;
            }
            _ => return false,
        };
        self.state.current_view = target;
        true
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.landing_max_scroll();
                self.state.scroll_down(max);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Enter => self.state.current_view = View::Register,
            _ => {}
        }
    }

    fn handle_faq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.faq.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_selected(),
            KeyCode::Esc => self.state.current_view = View::Landing,
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        let stop = self.state.registration.active_stop();
        if is_submit_shortcut(&key) || (key.code == KeyCode::Enter && stop == FormStop::Submit) {
            self.submit_registration();
            return;
        }
        // Leaving keeps whatever was typed
        if key.code == KeyCode::Esc {
            self.state.current_view = View::Landing;
            return;
        }

        let form = &mut self.state.registration;
        match key.code {
            KeyCode::Tab | KeyCode::Enter => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Right | KeyCode::Down if stop == FormStop::CountryCode => {
                form.next_country_code();
            }
            KeyCode::Left | KeyCode::Up if stop == FormStop::CountryCode => {
                form.prev_country_code();
            }
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Backspace => {
                form.backspace();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c);
            }
            _ => {}
        }
    }

    /// Validate and, if the form is ready, send it in the background
    pub fn submit_registration(&mut self) {
        match self.state.registration.submit() {
            SubmitOutcome::Ready(request) => self.dispatch(request),
            SubmitOutcome::Invalid => {
                let count = self.state.registration.errors().len();
                self.status_message = Some(format!(
                    "{count} field{} need{} attention",
                    if count == 1 { "" } else { "s" },
                    if count == 1 { "s" } else { "" },
                ));
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn dispatch(&mut self, request: SubmissionRequest) {
        let payload = SubmissionPayload::compose(&request.data, &self.extra_fields, Utc::now());
        let gateway = Arc::clone(&self.gateway);
        let results = self.results_tx.clone();
        debug!(timestamp = %payload.timestamp, "Dispatching registration");

        tokio::spawn(async move {
            let result = gateway.deliver(&payload).await;
            // The receiver lives as long as the app
            let _ = results.send(result);
        });
    }

    /// Apply finished submissions; returns true if any settled
    pub fn poll_submission(&mut self) -> bool {
        let mut settled = false;
        while let Ok(result) = self.results_rx.try_recv() {
            self.state.registration.settle(result);
            settled = true;
        }
        if settled && self.state.registration.state().is_success() {
            self.state.current_view = View::Register;
        }
        settled
    }

    /// Time-based housekeeping, called once per loop iteration
    pub fn tick(&mut self, now: Instant) {
        if self
            .state
            .registration
            .should_auto_reset(now, self.reset_cooldown)
        {
            info!("Confirmation timed out");
            self.reset_registration();
        }
    }

    fn reset_registration(&mut self) {
        self.state.registration.reset();
        self.status_message = Some("Form cleared".to_string());
    }
}
