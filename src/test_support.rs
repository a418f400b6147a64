//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use ratatui::text::Text;

use crate::core::focus::{FocusController, Focusable, Layout};
use crate::core::grid::{FocusableGrid, GridLayout};
use crate::core::store::KeyValueStore;

/// A layout for tests that only care about focus state.
pub struct NullLayout;

impl Layout for NullLayout {
    fn compose(&self, _units: &[Box<dyn Focusable>]) -> Text<'static> {
        Text::default()
    }
}

/// A grid writing to `selectedValue` in `store`.
pub fn grid(
    labels: [&str; 4],
    layout: GridLayout,
    store: &Arc<dyn KeyValueStore>,
) -> FocusableGrid {
    FocusableGrid::new(labels.map(String::from), layout, "selectedValue", store.clone())
}

/// Every unit's selection, in traversal order.
pub fn selections<L: Layout>(controller: &FocusController<L>) -> Vec<Option<usize>> {
    controller.units().iter().map(|u| u.selection()).collect()
}

/// Styled text flattened to its characters, lines joined with `\n`.
pub fn plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
