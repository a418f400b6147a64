//! # Actions
//!
//! Every keypress that reaches the focus layer becomes a `FocusEvent`.
//! User presses Right? That's `FocusEvent::Advance`.
//! User presses Enter? That's `FocusEvent::Unit(UnitInput::Activate)`.
//!
//! The controller takes its current state and an event, mutates itself,
//! then returns an `Effect` telling the driver what happened. No I/O here.
//!
//! ```text
//! State + FocusEvent  →  handle()  →  New State + Effect
//! ```

/// Input the controller routes. Only `Quit`, `Advance` and `Retreat` are
/// interpreted; `Unit` payloads are forwarded verbatim to the focused unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Ctrl+C / Esc
    Quit,
    /// Move focus forward (Right)
    Advance,
    /// Move focus backward (Left)
    Retreat,
    /// Anything else, owned by the focused unit
    Unit(UnitInput),
}

/// Opaque input the focused unit interprets against its own geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitInput {
    MoveDown,
    MoveUp,
    /// Commit the selected item's raw value to the store
    Activate,
    /// Keys no unit in this crate reacts to
    Key(char),
}

/// What the driver needs to know after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Focus was handed from unit `from` to unit `to`.
    FocusMoved { from: usize, to: usize },
    Quit,
}

impl From<UnitInput> for FocusEvent {
    fn from(input: UnitInput) -> Self {
        FocusEvent::Unit(input)
    }
}
