//! Application state definitions

use super::faq::FaqState;
use super::forms::LeadCaptureForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Faq,
    Register,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 3] = [View::Landing, View::Faq, View::Register];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Faq => "FAQ",
            Self::Register => "Register",
        }
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Register)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Landing
    pub landing_scroll: u16,

    // FAQ accordion
    pub faq: FaqState,

    // Registration form
    pub registration: LeadCaptureForm,

    // Modal error queue for problems outside the form
    errors: VecDeque<String>,
}

impl AppState {
    pub fn with_registration(registration: LeadCaptureForm) -> Self {
        Self {
            registration,
            ..Default::default()
        }
    }

    /// Scroll one row, never past `max`
    pub fn scroll_down(&mut self, max: u16) {
        self.landing_scroll = self.landing_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.landing_scroll = self.landing_scroll.saturating_sub(1);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
