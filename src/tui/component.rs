use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable piece of the screen.
///
/// Props arrive as struct fields; `render` draws them into `area`.
/// It takes `&mut self` so stateful components can refresh caches
/// (scroll offsets, editor viewports) during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The high-level event (usually an intent) this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
