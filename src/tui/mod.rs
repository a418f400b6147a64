//! # TUI Adapter
//!
//! The ratatui-specific layer. Builds the widgets from config, owns the
//! terminal, and pumps decoded key events into the `FocusController`.
//!
//! The loop is strictly one event at a time: block for a key, hand it to the
//! controller, redraw. All blocking happens here; the controller never waits.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::info;
use std::io;
use std::sync::Arc;

use ratatui::DefaultTerminal;

use crate::core::action::Effect;
use crate::core::config::{ResolvedConfig, WidgetEntry};
use crate::core::focus::{FocusController, Focusable};
use crate::core::grid::FocusableGrid;
use crate::core::store::{FileStore, KeyValueStore, MemoryStore, StoreError};
use crate::tui::components::{ApplicationLayout, Pane, ValueBox};

/// Open the configured store: a JSON file, or memory when persistence is off.
pub fn open_store(config: &ResolvedConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match &config.store_path {
        Some(path) => Ok(Arc::new(FileStore::open(path)?)),
        None => {
            info!("Persistence disabled, using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Build every widget in config order.
///
/// Focusable grids become controller units (traversal follows file order);
/// everything else is a fixed pane the controller never sees.
pub fn build_controller(
    config: &ResolvedConfig,
    store: Arc<dyn KeyValueStore>,
) -> FocusController<ApplicationLayout> {
    let mut units: Vec<Box<dyn Focusable>> = Vec::new();
    let mut layout = ApplicationLayout::default();

    for widget in &config.widgets {
        match widget {
            WidgetEntry::Value { key } => {
                let key = key.as_deref().unwrap_or(&config.select_key);
                layout.push(Pane::Fixed(Box::new(ValueBox::new(key, store.clone()))));
            }
            WidgetEntry::Grid {
                items,
                layout: grid_layout,
                focusable,
                key,
            } => {
                let key = key.as_deref().unwrap_or(&config.select_key);
                let grid = FocusableGrid::new(items.clone(), *grid_layout, key, store.clone());
                if *focusable {
                    units.push(Box::new(grid));
                    layout.push(Pane::Unit(units.len() - 1));
                } else {
                    layout.push(Pane::Fixed(Box::new(grid)));
                }
            }
        }
    }

    info!(
        "Built {} panes, {} focusable",
        layout.panes().len(),
        units.len()
    );
    FocusController::new(units, layout)
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let store = open_store(&config).map_err(io::Error::other)?;
    let mut controller = build_controller(&config, store);
    controller
        .initialize()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut controller);
    ratatui::restore();

    info!("Terminal restored, exiting");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut FocusController<ApplicationLayout>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, controller))?;

        // Unbound keys and resizes just fall through to a redraw
        let Some(event) = event::next_event()? else {
            continue;
        };
        if controller.handle(event) == Effect::Quit {
            return Ok(());
        }
    }
}
