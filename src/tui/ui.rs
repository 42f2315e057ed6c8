use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::render::ExplanationView;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ButtonState, Controls, ExplanationPane, HelpPopup, NoticePopup, TitleBar,
};

const DISCLAIMER: &str =
    "This tool is for research and educational purposes only. Not for clinical diagnosis.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, main_area, footer_area] =
        Layout::vertical([Length(TitleBar::HEIGHT), Min(0), Length(1)]).areas(frame.area());
    let [left_area, right_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);
    let [editor_area, controls_area] =
        Layout::vertical([Min(3), Length(Controls::HEIGHT)]).areas(left_area);

    TitleBar::new(app.status_message.clone(), app.input.reading_level.label())
        .render(frame, title_area);

    tui.editor.render(frame, editor_area);

    Controls::new(app.input.reading_level, button_state(app, spinner_frame))
        .render(frame, controls_area);

    let view = ExplanationView::from_state(&app.request);
    ExplanationPane::new(&view, spinner_frame, &mut tui.explanation).render(frame, right_area);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Disclaimer: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(DISCLAIMER),
        Span::styled("   F1 help", Style::default().fg(Color::Blue)),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);

    if tui.show_help {
        HelpPopup.render(frame, main_area);
    }
    if let Some(message) = &app.notice {
        NoticePopup { message }.render(frame, main_area);
    }
}

/// Submit is unavailable while a request is in flight or there is no text.
pub fn button_state(app: &App, spinner_frame: usize) -> ButtonState {
    if app.request.is_loading() {
        ButtonState::Busy(spinner_frame)
    } else if app.input.is_blank() {
        ButtonState::Disabled
    } else {
        ButtonState::Ready
    }
}
