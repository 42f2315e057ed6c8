//! Reading level selector and the submit button under the report editor.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::explain::ReadingLevel;
use crate::tui::component::Component;
use crate::tui::components::SPINNER_FRAMES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Ready,
    /// Request in flight; carries the spinner frame.
    Busy(usize),
    /// Nothing to submit yet.
    Disabled,
}

pub struct Controls {
    pub reading_level: ReadingLevel,
    pub button: ButtonState,
}

impl Controls {
    pub const HEIGHT: u16 = 4;

    pub fn new(reading_level: ReadingLevel, button: ButtonState) -> Self {
        Self {
            reading_level,
            button,
        }
    }

    fn selector_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Reading Level: ", Style::default().fg(Color::Gray))];
        for level in [ReadingLevel::Basic, ReadingLevel::Intermediate, ReadingLevel::Advanced] {
            let style = if level == self.reading_level {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", level.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("(Ctrl+R)", Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        match self.button {
            ButtonState::Ready => Line::from(Span::styled(
                "✦ Explain My Report (Enter)",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            ButtonState::Busy(frame) => Line::from(Span::styled(
                format!("{} Explaining...", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]),
                Style::default().fg(Color::Yellow),
            )),
            ButtonState::Disabled => Line::from(Span::styled(
                "✦ Explain My Report",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [selector_area, button_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

        frame.render_widget(Paragraph::new(self.selector_line()), selector_area);

        let border = match self.button {
            ButtonState::Ready => Style::default().fg(Color::Blue),
            ButtonState::Busy(_) => Style::default().fg(Color::Yellow),
            ButtonState::Disabled => Style::default().fg(Color::DarkGray),
        };
        let button = Paragraph::new(self.button_line())
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        frame.render_widget(button, button_area);
    }
}
