//! # TUI Components
//!
//! ### Stateless (props-based)
//!
//! - `TitleBar`: portal name, status, reading level, badges
//! - `Controls`: reading level selector and submit button
//! - `NoticePopup`, `HelpPopup`: modal overlays
//!
//! ### Stateful
//!
//! - `ReportEditor`: the report text area (owns its buffer and cursor)
//! - `ExplanationPane`: transient view over `ExplanationPaneState` (scroll)
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered against a `TestBackend` in isolation.

pub mod controls;
pub mod explanation_pane;
pub mod glossary;
pub mod overlay;
pub mod report_editor;
mod title_bar;

pub use controls::{ButtonState, Controls};
pub use explanation_pane::{ExplanationPane, ExplanationPaneState};
pub use overlay::{HelpPopup, NoticePopup};
pub use report_editor::{EditorEvent, ReportEditor};
pub use title_bar::TitleBar;

/// Braille spinner shared by the loading indicators.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
