//! # Core Focus Logic
//!
//! Routing, per-widget selection, persistence and configuration.
//! Nothing here touches the terminal or blocks on input. Widgets describe
//! themselves as ratatui `Text` values; drawing them is the TUI's job.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FocusEvent / Effect  │
//!                    │  • FocusController      │
//!                    │  • FocusableGrid        │
//!                    │  • KeyValueStore        │
//!                    │  • Renderable, Tile     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: `FocusEvent`, `UnitInput` and `Effect`
//! - [`focus`]: the `Focusable` contract and the `FocusController`
//! - [`grid`]: the four-tile reference unit
//! - [`store`]: persisted key-value capability
//! - [`render`]: the `Renderable` capability and text block joining
//! - [`tile`]: the bordered box every grid item is drawn as
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod focus;
pub mod grid;
pub mod render;
pub mod store;
pub mod tile;
