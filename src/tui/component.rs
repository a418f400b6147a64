use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component that draws directly into a frame region.
///
/// Used for chrome around the composed view (the help bar). Takes `&mut self`
/// to match ratatui's `StatefulWidget` pattern, even when no state is kept.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
