//! # Layout Composition
//!
//! `ApplicationLayout` is the screen-level `Layout`: an ordered list of panes
//! joined horizontally. A pane either points at a controller unit by index or
//! owns a widget that never takes focus.

use log::warn;
use ratatui::text::Text;

use crate::core::focus::{Focusable, Layout};
use crate::core::render::{Renderable, join_horizontal};

/// One slot in the screen layout.
pub enum Pane {
    /// Index into the controller's focusable units.
    Unit(usize),
    /// Display-only widget, outside the focus order.
    Fixed(Box<dyn Renderable>),
}

/// Everything that appears on screen, left to right.
#[derive(Default)]
pub struct ApplicationLayout {
    panes: Vec<Pane>,
}

impl ApplicationLayout {
    pub fn new(panes: Vec<Pane>) -> Self {
        Self { panes }
    }

    pub fn push(&mut self, pane: Pane) {
        self.panes.push(pane);
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }
}

impl Layout for ApplicationLayout {
    fn compose(&self, units: &[Box<dyn Focusable>]) -> Text<'static> {
        let blocks = self
            .panes
            .iter()
            .filter_map(|pane| match pane {
                Pane::Unit(index) => {
                    let unit = units.get(*index);
                    if unit.is_none() {
                        warn!("Layout refers to unit {} but only {} exist", index, units.len());
                    }
                    unit.map(|u| u.render())
                }
                Pane::Fixed(widget) => Some(widget.render()),
            })
            .collect();

        join_horizontal(blocks)
    }
}
