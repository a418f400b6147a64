//! # HelpBar Component
//!
//! Single line under the composed view: key hints on the left, focus
//! position on the right.
//!
//! ```text
//! ←/→ Focus  ↑/↓ Row  Enter Select  Esc Quit                  unit 2/3
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const HINTS: &str = " ←/→ Focus  ↑/↓ Row  Enter Select  Esc Quit";

pub struct HelpBar {
    /// Zero-based focused unit, `None` before focus is initialized.
    pub focused: Option<usize>,
    pub unit_count: usize,
}

impl HelpBar {
    pub fn new(focused: Option<usize>, unit_count: usize) -> Self {
        Self {
            focused,
            unit_count,
        }
    }

    fn position(&self) -> String {
        match self.focused {
            Some(index) => format!("unit {}/{} ", index + 1, self.unit_count),
            None => String::new(),
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        frame.render_widget(Paragraph::new(Line::from(HINTS)).style(style), area);
        frame.render_widget(
            Paragraph::new(Line::from(self.position()))
                .style(style)
                .alignment(Alignment::Right),
            area,
        );
    }
}
