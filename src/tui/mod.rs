//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Otherwise**: sleeps up to 500ms and only redraws on events.
//!
//! ## Requests
//!
//! `Effect::SpawnRequest` starts one tokio task that calls the client and
//! posts `Action::Settled` back over an mpsc channel. Submit is ignored while
//! a request is in flight; nothing cancels a request once sent.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::explain::{ExplainRequest, ExplanationClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{EditorEvent, ExplanationPaneState, ReportEditor};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub editor: ReportEditor,
    pub explanation: ExplanationPaneState,
    /// "How to Use" overlay visible
    pub show_help: bool,
}

impl TuiState {
    pub fn new(initial_report: String) -> Self {
        Self {
            editor: ReportEditor::new(initial_report),
            explanation: ExplanationPaneState::new(),
            show_help: false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets us tell Shift+Enter from Enter; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Routes one event. Returns `true` when the app should quit.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    client: &Arc<dyn ExplanationClient>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    if matches!(event, TuiEvent::Resize) {
        return false;
    }

    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit) == Effect::Quit;
    }

    // The notice is blocking: the next key only dismisses it
    if app.notice.is_some() {
        if !matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
            update(app, Action::DismissNotice);
        }
        return false;
    }

    if tui.show_help {
        if matches!(event, TuiEvent::ToggleHelp | TuiEvent::Escape) {
            tui.show_help = false;
        }
        return false;
    }

    match event {
        TuiEvent::ToggleHelp => tui.show_help = true,
        TuiEvent::CycleReadingLevel => {
            update(app, Action::CycleReadingLevel);
        }
        TuiEvent::Submit => {
            if app.request.is_loading() {
                debug!("Submit ignored: request already in flight");
            } else if let Effect::SpawnRequest(request) = update(app, Action::Submit) {
                tui.explanation.reset();
                spawn_request(client.clone(), request, tx.clone());
            }
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.explanation.handle_event(&event);
        }
        other => {
            if tui.editor.handle_event(&other) == Some(EditorEvent::Changed) {
                update(app, Action::EditReport(tui.editor.buffer.clone()));
            }
        }
    }
    false
}

pub fn run(config: &ResolvedConfig, client: Arc<dyn ExplanationClient>, initial_report: String) -> std::io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new(initial_report);
    if !tui.editor.buffer.is_empty() {
        update(&mut app, Action::EditReport(tui.editor.buffer.clone()));
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.request.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(event, &mut app, &mut tui, &client, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Settled outcomes from request tasks; a later one overwrites an earlier one
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Lumina shutting down");
    Ok(())
}

fn spawn_request(client: Arc<dyn ExplanationClient>, request: ExplainRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning explain request via {} client", client.name());
    tokio::spawn(async move {
        let outcome = client.explain(&request).await;
        if tx.send(Action::Settled(outcome)).is_err() {
            warn!("Failed to deliver explain outcome: receiver dropped");
        }
    });
}
