//! Centered modal popups: the blocking notice and the "How to Use" help.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const EDUCATIONAL_NOTE: &str = "Important: This tool is for educational purposes only. \
    Always discuss your results with your healthcare provider.";

const HELP_STEPS: [(&str, &str); 4] = [
    (
        "1. Upload your report:",
        "Copy and paste the radiology report text from your patient portal or email.",
    ),
    (
        "2. Select reading level:",
        "Choose how technical you want the explanation to be (Ctrl+R).",
    ),
    (
        "3. Get your explanation:",
        "Press Enter. Our AI will break down the medical jargon into clear, understandable language.",
    ),
    (
        "4. Review the glossary:",
        "Learn what common medical terms mean in simple language.",
    ),
];

/// Rect of `width` x `height` centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Blocking notice (validation prompt). Any key dismisses it.
pub struct NoticePopup<'a> {
    pub message: &'a str,
}

impl Component for NoticePopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(6).max(30);
        let popup = centered(area, width, 5);
        let text = vec![
            Line::from(Span::styled(self.message, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled("Press any key", Style::default().fg(Color::DarkGray))),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title("Notice"),
            );
        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

/// "How to Use" panel, toggled with F1.
pub struct HelpPopup;

impl Component for HelpPopup {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered(area, 72, 16);

        let mut lines = Vec::new();
        for (heading, detail) in HELP_STEPS {
            lines.push(Line::from(vec![
                Span::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(detail),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            EDUCATIONAL_NOTE,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Esc/F1 close · PgUp/PgDn scroll explanation · Ctrl+J new line · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue))
                .title("How to Use"),
        );
        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}
