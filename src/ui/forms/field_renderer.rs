//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one single-line input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    /// Editing disabled while a submission is in flight
    pub is_locked: bool,
}

fn border_color(is_active: bool, has_error: bool) -> Color {
    match (has_error, is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Bordered input; the error message sits in the bottom border
pub fn draw_text_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let cursor = if field.is_active && !field.is_locked {
        "▌"
    } else {
        ""
    };

    let value = if field.value.is_empty() {
        Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else if field.is_locked {
        Span::styled(field.value, Style::default().fg(Color::Gray))
    } else {
        Span::raw(field.value)
    };

    let line = if field.value.is_empty() {
        Line::from(vec![Span::styled(cursor, Style::default().fg(Color::Cyan)), value])
    } else {
        Line::from(vec![value, Span::styled(cursor, Style::default().fg(Color::Cyan))])
    };

    let block = framed(field.label, field.is_active, field.error);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Bordered, titled block shared by every input kind
pub fn framed<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let color = border_color(is_active, error.is_some());
    let title_style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {label} "), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(message) = error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ));
    }
    block
}

/// One-line dim help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wins_over_focus() {
        assert_eq!(border_color(true, true), Color::Red);
        assert_eq!(border_color(false, true), Color::Red);
    }

    #[test]
    fn test_focus_highlights_border() {
        assert_eq!(border_color(true, false), Color::Cyan);
        assert_eq!(border_color(false, false), Color::DarkGray);
    }
}
