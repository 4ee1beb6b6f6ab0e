//! Landing page: pitch, offer, sample work, process and testimonials

use super::layout;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HEADLINE: &str = "Get a Free Week of Content for Your Personal Brand";
const SUBHEADLINE: &str = "We script, edit and design short-form content for founders, \
accountants and advisors. Try a full week on us before you decide.";

const OFFER: &[(&str, &str)] = &[
    ("5", "Short-form reels"),
    ("2", "Carousel posts"),
    ("1", "Week of content, free"),
];

const PROMISES: &[&str] = &["No contracts", "No payments", "No pressure"];

const SERVICES: &[(&str, &str)] = &[
    ("Content Strategy & Ideation", "Viral concepts tailored to your niche"),
    ("Professional Scriptwriting", "Compelling scripts that convert"),
    ("Advanced Video Editing", "Cutting-edge effects and transitions"),
    ("Visual Design & Graphics", "Eye-catching branded visuals"),
    ("Platform Optimization", "Maximized for engagement and reach"),
];

/// Sample pieces from a delivered free week: (format, link)
const EXAMPLES: &[(&str, &str)] = &[
    ("Reel", "https://www.youtube.com/watch?v=p8TUR3itK4M"),
    ("Carousel", "https://www.youtube.com/watch?v=YBjd5rNi8wE"),
    ("Reel", "https://www.youtube.com/watch?v=-C36J87hju0"),
    ("Carousel", "https://www.youtube.com/watch?v=xQDeiDMpN84"),
    ("Reel", "https://www.youtube.com/watch?v=EdrIybETwBk"),
    ("Carousel", "https://www.youtube.com/watch?v=FBih9irDRcg"),
    ("Reel", "https://www.youtube.com/watch?v=rWgLufPBQdo"),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Drop Your Footage",
        "Upload your raw clips through WeTransfer, Google Drive or Dropbox.",
    ),
    (
        "We Do Our Magic",
        "We cut, trim, color-grade and add engaging transitions.",
    ),
    (
        "Feedback? Easy",
        "Want something changed? Revision rounds are part of the deal.",
    ),
    (
        "Upload & Grow",
        "Final videos arrive ready to post, with covers and captions.",
    ),
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ibrahim Mohammed",
        role: "Founder",
        company: "IAM Accounting",
        quote: "Even in the free content week the quality didn't drop at all. It looked like the same level of work I normally pay for.",
    },
    Testimonial {
        name: "Henok Kebede",
        role: "CPA & Founder",
        company: "HK Financial Advisory LLC",
        quote: "The free content week gave me the confidence to move forward. It felt usable, and that's what convinced me.",
    },
    Testimonial {
        name: "Shaan Rizvi",
        role: "Founder",
        company: "Riz Biz Services",
        quote: "I recorded the scripts they gave me and the final videos landed in my WhatsApp group within a week.",
    },
    Testimonial {
        name: "Devonta Brown",
        role: "CEO",
        company: "Brown Tax Solutions",
        quote: "They even provided reel covers and captions, so posting was basically copy-paste for me.",
    },
];

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Growdit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = landing_lines();
    let offset = app.state.landing_scroll.min(max_scroll_in(&lines, area));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Furthest the landing page scrolls in a terminal of this size
pub fn max_scroll(height: u16, width: u16) -> u16 {
    let (_, main_area) = layout::create_layout(Rect::new(0, 0, width, height));
    max_scroll_in(&landing_lines(), main_area)
}

/// Scroll offset at which the last wrapped row reaches the bottom border
fn max_scroll_in(lines: &[Line<'_>], area: Rect) -> u16 {
    let inner_width = usize::from(area.width.saturating_sub(2).max(1));
    let inner_height = area.height.saturating_sub(2);
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height)
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn landing_lines() -> Vec<Line<'static>> {
    let accent = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(SUBHEADLINE),
        Line::from(""),
    ];

    lines.push(Line::from(
        OFFER
            .iter()
            .flat_map(|(count, what)| {
                [
                    Span::styled(format!(" {count} "), accent),
                    Span::raw(format!("{what}   ")),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(
        PROMISES
            .iter()
            .map(|p| Span::styled(format!(" ✓ {p} "), Style::default().fg(Color::Green)))
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("3", accent),
        Span::raw(" to claim your free week."),
    ]));

    lines.push(Line::from(""));
    lines.push(heading("What we do"));
    for (title, desc) in SERVICES {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {title}"), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {desc}"), dim),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Examples"));
    lines.push(Line::from(Span::styled(
        "  A preview of what a free content week delivers",
        dim,
    )));
    for (kind, link) in EXAMPLES {
        lines.push(Line::from(vec![
            Span::styled(format!("  ▶ {kind:<9}"), accent),
            Span::styled(*link, Style::default().fg(Color::Blue)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("How it works"));
    for (idx, (title, desc)) in STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. {title}", idx + 1), accent),
            Span::raw(format!("  {desc}")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("What clients say"));
    for t in TESTIMONIALS {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("  \"{}\"", t.quote)));
        lines.push(Line::from(Span::styled(
            format!("    {}, {} at {}", t.name, t.role, t.company),
            dim,
        )));
    }

    lines
}
