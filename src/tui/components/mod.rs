//! # TUI Components
//!
//! Everything that ends up on screen.
//!
//! ## Component Architecture
//!
//! ### Text Widgets (`core::render::Renderable`)
//!
//! Produce a styled `Text` block that layout composition joins with others:
//! - `ValueBox`: tile showing the persisted selection
//! - `FocusableGrid` and `Tile` live in `core`, since the focus layer
//!   renders them itself
//!
//! ### Frame Widgets (`Component`)
//!
//! Draw straight into a frame region:
//! - `HelpBar`: key hints and focus position
//!
//! ### Composition
//!
//! `layout::ApplicationLayout` lists panes left to right. Focusable panes
//! refer to controller units by index, so the controller keeps sole
//! ownership of every unit it routes input to.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── value_box.rs  (persisted value display)
//! ├── layout.rs     (ApplicationLayout, Pane)
//! └── help_bar.rs   (bottom hint line)
//! ```

pub mod help_bar;
pub mod layout;
pub mod value_box;

pub use help_bar::HelpBar;
pub use layout::{ApplicationLayout, Pane};
pub use value_box::ValueBox;
