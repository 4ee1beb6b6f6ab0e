//! Shared modal overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides combined
const PADDING: u16 = 4;

pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Free text, word-wrapped to fit
    pub message: &'a str,
    /// Pre-styled rows rendered after the message, never wrapped
    pub details: Vec<Line<'a>>,
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "",
            accent: Color::White,
            message: "",
            details: Vec::new(),
            hint: None,
            max_width: 60,
        }
    }
}

/// Standard "Press Enter or Esc to ..." footer
pub fn dismiss_hint(action: &str) -> Vec<Span<'_>> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(format!(" to {action}")),
    ]
}

/// Draw a centered dialog on top of whatever is already rendered
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let screen = frame.area();
    let max_width = config.max_width.min(screen.width);
    let text_width = max_width.saturating_sub(PADDING + 2).max(1) as usize;

    let wrapped = wrap_text(config.message, text_width);
    let widest_detail = config.details.iter().map(Line::width).max().unwrap_or(0);
    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain([widest_detail, config.title.chars().count()])
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + PADDING + 2).min(max_width);

    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let detail_rows = if config.details.is_empty() {
        0
    } else {
        config.details.len() as u16 + 1
    };
    let height = (2 + wrapped.len() as u16 + detail_rows + hint_rows + 2)
        .max(5)
        .min(screen.height);

    let area = centered(screen, width, height);
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    if !config.details.is_empty() {
        content.push(Line::from(""));
        content.extend(config.details);
    }
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(Color::Black));
    let paragraph = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: outer.x + outer.width.saturating_sub(width) / 2,
        y: outer.y + outer.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; blank input lines are kept as paragraph breaks
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
