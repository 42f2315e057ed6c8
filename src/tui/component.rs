use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into a region of the frame.
///
/// Data comes in as struct fields ("props"). `render` takes `&mut self` so a
/// component can refresh caches or scroll state during the draw pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
