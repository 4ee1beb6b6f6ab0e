//! Lead registration form with action sidebar

use super::field_renderer::{draw_help_text, draw_text_field, framed, FieldView};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{find_country, FieldName, FormStop, LeadCaptureForm, SubmissionState};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    let form = &app.state.registration;
    draw_form(frame, chunks[0], form);
    draw_action_panel(frame, chunks[1], form);
}

fn text_field<'a>(form: &'a LeadCaptureForm, field: FieldName) -> FieldView<'a> {
    FieldView {
        label: field.label(),
        value: form.data().text(field).unwrap_or_default(),
        placeholder: field.placeholder(),
        error: form.error(field),
        is_active: form.active_stop() == FormStop::Field(field),
        is_locked: form.is_locked(),
    }
}

fn draw_form(frame: &mut Frame, area: Rect, form: &LeadCaptureForm) {
    let focused = form.active_stop() != FormStop::Submit;
    let block = Block::default()
        .title(" Claim Your Free Week ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Firm name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Country code + WhatsApp
            Constraint::Length(3), // Website or LinkedIn
            Constraint::Length(3), // Consent
            Constraint::Min(1),    // Form-level status
            Constraint::Length(1), // Help
        ])
        .margin(1)
        .split(area);

    draw_text_field(frame, chunks[0], &text_field(form, FieldName::FullName));
    draw_text_field(frame, chunks[1], &text_field(form, FieldName::FirmName));
    draw_text_field(frame, chunks[2], &text_field(form, FieldName::Email));

    let phone_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(chunks[3]);
    draw_country_selector(frame, phone_row[0], form);
    draw_text_field(frame, phone_row[1], &text_field(form, FieldName::Whatsapp));

    draw_text_field(
        frame,
        chunks[4],
        &text_field(form, FieldName::WebsiteOrLinkedIn),
    );
    draw_consent(frame, chunks[5], form);
    draw_status(frame, chunks[6], form.state());

    draw_help_text(frame, chunks[7], &help_text(form.active_stop()));
}

fn draw_country_selector(frame: &mut Frame, area: Rect, form: &LeadCaptureForm) {
    let is_active = form.active_stop() == FormStop::CountryCode;
    let code = &form.data().country_code;
    let label = find_country(code)
        .map(|c| format!("{} {}", c.iso.to_uppercase(), c.label()))
        .unwrap_or_else(|| code.clone());

    let arrow_style = if is_active && !form.is_locked() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::raw(label),
        Span::styled(" ▶", arrow_style),
    ]);

    let block = framed("Code", is_active, None);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_consent(frame: &mut Frame, area: Rect, form: &LeadCaptureForm) {
    let is_active = form.active_stop() == FormStop::Field(FieldName::Consent);
    let error = form.error(FieldName::Consent);
    let mark = if form.data().consent { "[x]" } else { "[ ]" };

    let mark_style = if form.data().consent {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" I agree to be contacted about my free week of content"),
    ]);

    let block = framed(FieldName::Consent.label(), is_active, error);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &SubmissionState) {
    let line = if let Some(reason) = state.failure_message() {
        Line::from(vec![
            Span::styled(
                "✗ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(reason, Style::default().fg(Color::Red)),
        ])
    } else if state.is_submitting() {
        Line::from(Span::styled(
            "Sending your registration...",
            Style::default().fg(Color::Yellow),
        ))
    } else if state.is_success() {
        Line::from(Span::styled(
            "✓ Registration received",
            Style::default().fg(Color::Green),
        ))
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn draw_action_panel(frame: &mut Frame, area: Rect, form: &LeadCaptureForm) {
    let is_focused = form.active_stop() == FormStop::Submit;
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),
            Constraint::Min(0), // Shortcut hint
        ])
        .split(inner);

    render_action_button(
        frame,
        chunks[0],
        submit_label(form.state()),
        is_focused,
        form.can_submit(),
        Some(Color::Green),
    );

    let hint = Paragraph::new(format!("{SUBMIT_SHORTCUT} submits from any field"))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, chunks[2]);
}

fn submit_label(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Get My Free Week",
        SubmissionState::Submitting => "Submitting...",
        SubmissionState::Success => "Submitted",
        SubmissionState::Failed(_) => "Try Again",
    }
}

fn help_text(stop: FormStop) -> String {
    match stop {
        FormStop::CountryCode => "←/→:code  Tab:next  Esc:leave".to_string(),
        FormStop::Field(FieldName::Consent) => "Space:toggle  Tab:next  Esc:leave".to_string(),
        FormStop::Submit => "Enter:submit  Shift+Tab:back  Esc:leave".to_string(),
        FormStop::Field(_) => format!("Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:leave"),
    }
}
