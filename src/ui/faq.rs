//! FAQ accordion

use crate::app::App;
use crate::state::{FaqState, FAQ_ENTRIES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Frequently Asked Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let faq = &app.state.faq;
    let lines = faq_lines(faq);
    // keep the selected question in view
    let offset = selected_offset(faq).saturating_sub(area.height.saturating_sub(4) / 2);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

fn faq_lines(faq: &FaqState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, entry) in FAQ_ENTRIES.iter().enumerate() {
        let is_selected = idx == faq.selected;
        let is_open = faq.is_open(idx);
        let marker = if is_open { "▾" } else { "▸" };

        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(" {marker} {}", entry.question),
            style,
        )));
        if is_open {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Unwrapped line index of the selected question
fn selected_offset(faq: &FaqState) -> u16 {
    (0..faq.selected)
        .map(|idx| if faq.is_open(idx) { 3 } else { 2 })
        .sum()
}
