//! # Focusable Grid
//!
//! The reference `Focusable`: four tiles arranged as a single column (`1x4`),
//! a single row (`4x1`) or a square (`2x2`).
//!
//! ```text
//!   1x4        4x1                2x2
//!  ┌───┐    ┌───┬───┬───┬───┐   ┌───┬───┐
//!  │ 0 │    │ 0 │ 1 │ 2 │ 3 │   │ 0 │ 1 │
//!  │ 1 │    └───┴───┴───┴───┘   ├───┼───┤
//!  │ 2 │                        │ 2 │ 3 │
//!  │ 3 │                        └───┴───┘
//!  └───┘
//! ```
//!
//! Boundary probes walk the items linearly in row-major order for every
//! layout. Up/Down only move in `2x2`, by one row, and never wrap.
//! Enter writes the selected tile's raw value to the store under `select_key`.

use std::sync::Arc;

use log::{debug, info, warn};
use ratatui::text::Text;
use serde::{Deserialize, Serialize};

use crate::core::action::UnitInput;
use crate::core::focus::{Focusable, Probe};
use crate::core::render::{Renderable, join_horizontal, join_vertical};
use crate::core::store::KeyValueStore;
use crate::core::tile::Tile;

/// Number of tiles in a grid.
pub const GRID_ITEMS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GridLayout {
    /// One column, four rows.
    #[serde(rename = "1x4")]
    Column,
    /// One row, four columns.
    #[serde(rename = "4x1")]
    Row,
    #[default]
    #[serde(rename = "2x2")]
    TwoByTwo,
}

impl GridLayout {
    /// Tiles per row, or `None` when there is no orthogonal axis to move on.
    pub fn row_stride(self) -> Option<usize> {
        match self {
            GridLayout::TwoByTwo => Some(2),
            GridLayout::Column | GridLayout::Row => None,
        }
    }
}

pub struct FocusableGrid {
    tiles: [Tile; GRID_ITEMS],
    /// `None` while unfocused
    selection: Option<usize>,
    select_key: String,
    layout: GridLayout,
    store: Arc<dyn KeyValueStore>,
}

impl FocusableGrid {
    pub fn new(
        labels: [String; GRID_ITEMS],
        layout: GridLayout,
        select_key: impl Into<String>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            tiles: labels.map(Tile::new),
            selection: None,
            select_key: select_key.into(),
            layout,
            store,
        }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn last_index(&self) -> usize {
        self.tiles.len() - 1
    }

    fn move_by_row(&mut self, down: bool) {
        let (Some(selected), Some(stride)) = (self.selection, self.layout.row_stride()) else {
            return;
        };
        let target = if down {
            selected + stride
        } else {
            match selected.checked_sub(stride) {
                Some(target) => target,
                None => return,
            }
        };
        if target <= self.last_index() {
            self.selection = Some(target);
        }
    }

    fn activate(&self) {
        let Some(selected) = self.selection else {
            return;
        };
        let value = self.tiles[selected].raw();
        match self.store.set(&self.select_key, value) {
            Ok(()) => info!("Selected {:?} under key {:?}", value, self.select_key),
            Err(e) => warn!("Failed to store selection {:?}: {}", value, e),
        }
    }
}

impl Focusable for FocusableGrid {
    fn focus_next(&mut self) -> Probe {
        debug_assert!(self.selection.is_some(), "focus step on unfocused grid");
        match self.selection {
            Some(selected) if selected < self.last_index() => {
                self.selection = Some(selected + 1);
                Probe::Continued
            }
            _ => Probe::Exhausted,
        }
    }

    fn focus_previous(&mut self) -> Probe {
        debug_assert!(self.selection.is_some(), "focus step on unfocused grid");
        match self.selection {
            Some(selected) if selected > 0 => {
                self.selection = Some(selected - 1);
                Probe::Continued
            }
            _ => Probe::Exhausted,
        }
    }

    fn receive_focus_from_start(&mut self) {
        self.selection = Some(0);
    }

    fn receive_focus_from_end(&mut self) {
        self.selection = Some(self.last_index());
    }

    fn remove_focus(&mut self) {
        self.selection = None;
    }

    fn update(&mut self, input: UnitInput) {
        match input {
            UnitInput::MoveDown => self.move_by_row(true),
            UnitInput::MoveUp => self.move_by_row(false),
            UnitInput::Activate => self.activate(),
            UnitInput::Key(c) => debug!("Grid ignoring key {:?}", c),
        }
    }

    fn selection(&self) -> Option<usize> {
        self.selection
    }
}

impl Renderable for FocusableGrid {
    fn render(&self) -> Text<'static> {
        let mut rendered = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| tile.styled(self.selection == Some(i)))
            .collect::<Vec<_>>();

        match self.layout {
            GridLayout::Column => join_vertical(rendered),
            GridLayout::Row => join_horizontal(rendered),
            GridLayout::TwoByTwo => {
                let bottom = rendered.split_off(2);
                join_vertical(vec![join_horizontal(rendered), join_horizontal(bottom)])
            }
        }
    }
}
