//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FormStop, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split into sidebar and content, leaving the last row for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &(idx + 1).to_string(),
            view.label(),
            app.state.current_view == *view,
            true,
        );
    }
}

pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![if app.endpoint_configured() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    }];

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Black),
    ));

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Landing => "j/k:scroll  1-3:views  q:quit".to_string(),
        View::Faq => "j/k:select  Enter:expand  1-3:views  q:quit".to_string(),
        View::Register => match app.state.registration.active_stop() {
            FormStop::Submit => "Enter:submit  Tab:next  Esc:leave form".to_string(),
            _ => format!("Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:leave form"),
        },
    }
}
