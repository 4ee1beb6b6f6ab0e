//! UI module for rendering the TUI

mod components;
mod faq;
mod forms;
mod landing;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

pub use landing::max_scroll as landing_max_scroll;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (sidebar_area, main_area) = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app),
        View::Faq => faq::draw(frame, main_area, app),
        View::Register => forms::draw_registration(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays, error last so it sits on top
    if let Some(submitted) = app.state.registration.confirmation() {
        let remaining = app.reset_remaining(Instant::now()).map(|d| d.as_secs());
        components::render_success_dialog(frame, submitted, remaining);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
