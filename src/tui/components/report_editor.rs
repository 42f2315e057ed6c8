//! # ReportEditor Component
//!
//! Multi-line text area for pasting the radiology report.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text (newlines preserved)
//! - Cursor movement: arrows, Home/End, Backspace/Delete
//! - Soft-wrap long lines to the panel width and keep the cursor in view
//!
//! Submitting is not handled here. The text stays in the editor after a
//! submit so the user can tweak it and resubmit.
//!
//! ## Wrapping
//!
//! Lines are hard-wrapped by display width (not at word boundaries). That
//! keeps the byte-offset → screen-position mapping exact, which the cursor
//! placement relies on.

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (1 each side) consumed horizontally, plus one column kept free so
/// the cursor can sit after the last character of a full line.
const HORIZONTAL_OVERHEAD: u16 = 3;
const VERTICAL_OVERHEAD: u16 = 2;

const PLACEHOLDER: &str = "IMPRESSION:\n\nExample: The diagnostic quality of this thoracolumbar spine \
    and pelvis X-ray is severely limited by glare, overexposure, and external artifacts...";

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Buffer content changed.
    Changed,
    /// Only the cursor moved.
    Moved,
}

/// One row on screen: a byte range of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisualLine {
    start: usize,
    end: usize,
    /// Ends at a `\n` or at the end of the buffer (not a soft wrap).
    hard_end: bool,
}

pub struct ReportEditor {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    /// First visible visual line.
    scroll: usize,
    /// Wrap width from the last render, used for vertical movement.
    last_wrap_width: usize,
}

impl Default for ReportEditor {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ReportEditor {
    pub fn new(initial: String) -> Self {
        let buffer = normalize_line_breaks(&initial);
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            scroll: 0,
            last_wrap_width: 80,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        let normalized = normalize_line_breaks(text);
        self.buffer.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn move_vertically(&mut self, down: bool) -> bool {
        let lines = wrap(&self.buffer, self.last_wrap_width);
        let (row, col) = locate(&self.buffer, &lines, self.cursor);
        let target = if down {
            if row + 1 >= lines.len() {
                return false;
            }
            row + 1
        } else {
            if row == 0 {
                return false;
            }
            row - 1
        };
        self.cursor = offset_at_column(&self.buffer, lines[target], col);
        true
    }
}

/// Split `text` into screen rows no wider than `width` columns.
// Terminals send CR for pasted line breaks on some platforms, and report
// files may use CRLF
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn wrap(text: &str, width: usize) -> Vec<VisualLine> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            lines.push(VisualLine { start, end: i, hard_end: true });
            start = i + 1;
            used = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if used + w > width && used > 0 {
            lines.push(VisualLine { start, end: i, hard_end: false });
            start = i;
            used = 0;
        }
        used += w;
    }
    lines.push(VisualLine { start, end: text.len(), hard_end: true });
    lines
}

/// Row index and display column of byte offset `pos`.
fn locate(text: &str, lines: &[VisualLine], pos: usize) -> (usize, usize) {
    let row = lines
        .iter()
        .position(|l| l.start <= pos && (pos < l.end || (pos == l.end && l.hard_end)))
        .unwrap_or(lines.len().saturating_sub(1));
    let line = lines[row];
    let col = text[line.start..pos.clamp(line.start, line.end)]
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    (row, col)
}

/// Byte offset on `line` closest to display column `col` (not past it).
fn offset_at_column(text: &str, line: VisualLine, col: usize) -> usize {
    let mut used = 0;
    for (i, c) in text[line.start..line.end].char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > col {
            return line.start + i;
        }
        used += w;
    }
    // A soft-wrapped row's end belongs to the next row
    if line.hard_end || line.end == line.start {
        line.end
    } else {
        let last = text[line.start..line.end]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        line.start + last
    }
}

impl Component for ReportEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Your Radiology Report")
            .border_style(Style::default().fg(Color::Blue));

        let wrap_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let visible_rows = area.height.saturating_sub(VERTICAL_OVERHEAD) as usize;
        self.last_wrap_width = wrap_width;

        if self.buffer.is_empty() {
            let hint = Paragraph::new(PLACEHOLDER)
                .wrap(ratatui::widgets::Wrap { trim: false })
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .block(block);
            frame.render_widget(hint, area);
            frame.set_cursor_position((area.x + 1, area.y + 1));
            return;
        }

        let lines = wrap(&self.buffer, wrap_width);
        let (row, col) = locate(&self.buffer, &lines, self.cursor);

        if row < self.scroll {
            self.scroll = row;
        } else if visible_rows > 0 && row >= self.scroll + visible_rows {
            self.scroll = row + 1 - visible_rows;
        }

        let shown: Vec<Line> = lines
            .iter()
            .skip(self.scroll)
            .take(visible_rows)
            .map(|l| Line::raw(&self.buffer[l.start..l.end]))
            .collect();

        let paragraph = Paragraph::new(shown).block(block);
        frame.render_widget(paragraph, area);

        if visible_rows > 0 {
            let x = area.x + 1 + col as u16;
            let y = area.y + 1 + (row - self.scroll) as u16;
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for ReportEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(EditorEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                debug!("Paste into report editor: {} bytes", text.len());
                self.insert_str(text);
                Some(EditorEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                EditorEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                EditorEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = self.prev_boundary();
                EditorEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.next_boundary();
                EditorEvent::Moved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    EditorEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    EditorEvent::Moved
                })
            }
            TuiEvent::CursorUp => self.move_vertically(false).then_some(EditorEvent::Moved),
            TuiEvent::CursorDown => self.move_vertically(true).then_some(EditorEvent::Moved),
            _ => None,
        }
    }
}
