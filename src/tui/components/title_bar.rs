//! # TitleBar Component
//!
//! Two-line header: portal name, tagline and status on the first line, the
//! compliance badges on the second.
//!
//! The badges are decorative. Nothing in Lumina enforces them.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const PORTAL_NAME: &str = "LuminaMed Patient Portal";

const BADGES: [(&str, Color); 3] = [
    ("HIPAA Compliant", Color::Green),
    ("Secure & Private", Color::Blue),
    ("AI-Powered", Color::Magenta),
];

/// Header bar. All fields are props.
pub struct TitleBar {
    pub status_message: String,
    pub reading_level_label: &'static str,
}

impl TitleBar {
    pub fn new(status_message: String, reading_level_label: &'static str) -> Self {
        Self {
            status_message,
            reading_level_label,
        }
    }

    pub const HEIGHT: u16 = 2;

    fn heading(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(
            PORTAL_NAME,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Level: {}", self.reading_level_label),
            Style::default().fg(Color::Cyan),
        ));
        Line::from(spans)
    }

    fn badges() -> Line<'static> {
        let mut spans = Vec::with_capacity(BADGES.len() * 2);
        for (i, (label, color)) in BADGES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("✓ {label}"),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph =
            Paragraph::new(vec![self.heading(), Self::badges()]).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_status_and_level() {
        let mut title_bar = TitleBar::new("Explaining...".into(), "Basic (5th-6th Grade)");
        let text = rendered(&mut title_bar);
        assert!(text.contains(PORTAL_NAME));
        assert!(text.contains("Explaining..."));
        assert!(text.contains("Basic (5th-6th Grade)"));
    }

    #[test]
    fn test_title_bar_shows_badges() {
        let mut title_bar = TitleBar::new(String::new(), "Intermediate (8th Grade)");
        let text = rendered(&mut title_bar);
        assert!(text.contains("HIPAA Compliant"));
        assert!(text.contains("Secure & Private"));
        assert!(text.contains("AI-Powered"));
    }
}
