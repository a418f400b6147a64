use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use crate::core::focus::{FocusController, Layout as FocusLayout};
use crate::tui::component::Component;
use crate::tui::components::HelpBar;

pub fn draw_ui<L: FocusLayout>(frame: &mut Frame, controller: &FocusController<L>) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [main_area, help_area] = layout.areas(frame.area());

    frame.render_widget(Paragraph::new(controller.view()), main_area);

    let mut help_bar = HelpBar::new(controller.current_index(), controller.units().len());
    help_bar.render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::FocusEvent;
    use crate::core::focus::Focusable;
    use crate::core::grid::GridLayout;
    use crate::core::store::{KeyValueStore, MemoryStore};
    use crate::test_support::grid;
    use crate::tui::components::{ApplicationLayout, Pane};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use std::sync::Arc;

    #[test]
    fn test_draw_ui_renders_view_and_help() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let units: Vec<Box<dyn Focusable>> =
            vec![Box::new(grid(["A", "B", "C", "D"], GridLayout::Row, &store))];
        let layout = ApplicationLayout::new(vec![Pane::Unit(0)]);
        let mut controller = FocusController::new(units, layout);
        controller.initialize().unwrap();
        controller.handle(FocusEvent::Advance);

        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &controller)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        };
        assert!(row(1).starts_with("│    A    ││    B    │"));
        assert!(row(4).contains("unit 1/1"));

        // "B" sits at column 16 of the body row and is highlighted
        assert_eq!(buffer[(16, 1)].symbol(), "B");
        assert!(buffer[(16, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(5, 1)].modifier.contains(Modifier::REVERSED));
    }
}
