//! Registration confirmation dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::state::{find_country, RegistrationFormData};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const THANK_YOU: &str = "Thank you for registering! We'll be in touch shortly to start your \
free week of content.";

/// Show what was submitted; `remaining` is the auto-reset countdown in seconds
pub fn render_success_dialog(
    frame: &mut Frame,
    submitted: &RegistrationFormData,
    remaining: Option<u64>,
) {
    let mut details = summary_lines(submitted);
    if let Some(secs) = remaining {
        details.push(Line::from(""));
        details.push(Line::from(Span::styled(
            format!("The form resets in {secs}s"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Registration received",
            accent: Color::Green,
            message: THANK_YOU,
            details,
            hint: Some(dismiss_hint("start over")),
            max_width: 70,
        },
    );
}

fn summary_lines(data: &RegistrationFormData) -> Vec<Line<'static>> {
    let country = find_country(&data.country_code)
        .map(|c| format!("{} ({})", data.full_whatsapp(), c.name))
        .unwrap_or_else(|| data.full_whatsapp());

    [
        ("Name", data.full_name.clone()),
        ("Firm", data.firm_name.clone()),
        ("Email", data.email.clone()),
        ("WhatsApp", country),
        ("Website", data.website_or_linked_in.clone()),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(
                format!("{label:<10}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ])
    })
    .collect()
}
