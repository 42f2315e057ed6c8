//! # ExplanationPane Component
//!
//! Right-hand panel. Shows a placeholder while idle or loading and, once a
//! request settles, the key takeaway, the full explanation and the glossary.
//!
//! ## Architecture
//!
//! Like the other scrolling views, this is a transient component created
//! each frame around `&mut ExplanationPaneState`, which outlives it in
//! `TuiState`. Row heights are computed up front with `textwrap` so the
//! `ScrollView` can be sized before anything is drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::render::{ExplanationResult, ExplanationView, Placeholder};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::SPINNER_FRAMES;
use crate::tui::components::glossary::glossary_lines;
use crate::tui::event::TuiEvent;

/// Border + padding on each side of the takeaway box.
const TAKEAWAY_OVERHEAD: u16 = 4;

/// Scroll state for the explanation pane. Persisted in `TuiState`.
#[derive(Default)]
pub struct ExplanationPaneState {
    pub scroll_state: ScrollViewState,
    /// Content height from the last render.
    content_height: u16,
    /// Viewport height from the last render.
    viewport_height: u16,
}

impl ExplanationPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when a new result arrives.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for ExplanationPaneState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        Some(())
    }
}

/// Wrap `text` to `width`, keeping blank lines and explicit breaks.
fn wrap_preserving_breaks(text: &str, width: u16) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| {
            textwrap::wrap(line, &options)
                .into_iter()
                .map(|row| row.into_owned())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Row count as a scroll height. Anything past `u16::MAX` is clipped.
fn rows_to_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub struct ExplanationPane<'a> {
    pub view: &'a ExplanationView,
    pub spinner_frame: usize,
    pub state: &'a mut ExplanationPaneState,
}

impl<'a> ExplanationPane<'a> {
    pub fn new(view: &'a ExplanationView, spinner_frame: usize, state: &'a mut ExplanationPaneState) -> Self {
        Self {
            view,
            spinner_frame,
            state,
        }
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, placeholder: Placeholder) {
        let line = match placeholder {
            Placeholder::AwaitingInput => Line::from(Span::styled(
                placeholder.message(),
                Style::default().fg(Color::DarkGray),
            )),
            Placeholder::InProgress => Line::from(vec![
                Span::styled(
                    SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(placeholder.message(), Style::default().fg(Color::Gray)),
            ]),
        };

        let [centered] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), centered);
    }

    fn render_result(&mut self, frame: &mut Frame, area: Rect, result: &ExplanationResult) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let takeaway_rows = wrap_preserving_breaks(
            &result.key_takeaway,
            content_width.saturating_sub(TAKEAWAY_OVERHEAD),
        );
        let takeaway_height = rows_to_height(takeaway_rows.len()).saturating_add(2);

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Detailed Explanation",
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
        ];
        lines.extend(
            wrap_preserving_breaks(&result.body, content_width)
                .into_iter()
                .map(|row| Line::styled(row, Style::default().fg(Color::White))),
        );
        lines.push(Line::raw(""));
        lines.extend(glossary_lines(content_width));
        let rest_height = rows_to_height(lines.len());

        let total_height = takeaway_height.saturating_add(rest_height);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let takeaway = Paragraph::new(
            takeaway_rows
                .into_iter()
                .map(|row| Line::styled(row, Style::default().fg(Color::LightBlue)))
                .collect::<Vec<_>>(),
        )
        .block(
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Blue))
                .title(Span::styled(
                    "Key Takeaway",
                    Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1)),
        );
        scroll_view.render_widget(takeaway, Rect::new(0, 0, content_width, takeaway_height));
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, takeaway_height, content_width, rest_height),
        );

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for ExplanationPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Plain Language Explanation");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let view = self.view;
        match view {
            ExplanationView::Placeholder(placeholder) => {
                self.render_placeholder(frame, inner, *placeholder)
            }
            ExplanationView::Ready(result) => self.render_result(frame, inner, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RequestState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_view(view: &ExplanationView, state: &mut ExplanationPaneState, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ExplanationPane::new(view, 0, state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_placeholder() {
        let view = ExplanationView::from_state(&RequestState::Idle);
        let text = render_view(&view, &mut ExplanationPaneState::new(), 60, 10);
        assert!(text.contains("Your explanation will appear here"));
    }

    #[test]
    fn test_loading_placeholder() {
        let view = ExplanationView::from_state(&RequestState::Loading);
        let text = render_view(&view, &mut ExplanationPaneState::new(), 60, 10);
        assert!(text.contains("AI is analyzing your report..."));
        assert!(!text.contains("Key Takeaway"));
    }

    #[test]
    fn test_settled_shows_takeaway_body_and_glossary() {
        let view = ExplanationView::from_state(&RequestState::Settled(
            "Your lungs look healthy.\nNo fluid was seen.".into(),
        ));
        let text = render_view(&view, &mut ExplanationPaneState::new(), 80, 40);
        assert!(text.contains("Key Takeaway"));
        assert!(text.contains("Your lungs look healthy."));
        assert!(text.contains("Detailed Explanation"));
        assert!(text.contains("No fluid was seen."));
        assert!(text.contains("Medical Terms Glossary"));
        assert!(text.contains("Atelectasis"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let view = ExplanationView::from_state(&RequestState::Settled("Short".into()));
        let mut state = ExplanationPaneState::new();
        render_view(&view, &mut state, 80, 40);

        for _ in 0..50 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_very_long_explanation_saturates_height() {
        let view = ExplanationView::from_state(&RequestState::Settled("x\n".repeat(65_517)));
        let mut state = ExplanationPaneState::new();
        let text = render_view(&view, &mut state, 40, 10);

        assert!(text.contains("Key Takeaway"));
        assert_eq!(state.content_height, u16::MAX);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert!(state.scroll_state.offset().y <= u16::MAX - state.viewport_height);
    }

    #[test]
    fn test_rows_to_height_clips() {
        assert_eq!(rows_to_height(3), 3);
        assert_eq!(rows_to_height(usize::from(u16::MAX) + 10), u16::MAX);
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        let rows = wrap_preserving_breaks("a\n\nb\r\nc", 10);
        assert_eq!(rows, vec!["a", "", "b", "c"]);
    }
}
