//! # Focus Delegation
//!
//! Two-level focus: the `FocusController` decides *which* unit holds focus,
//! each `Focusable` unit decides *where* inside itself the selection sits.
//!
//! ```text
//!   FocusEvent
//!       │
//!       ▼
//!  ┌──────────────────┐  Advance/Retreat   ┌──────────────────┐
//!  │ FocusController  │ ─────────────────▶ │ unit[current]    │
//!  │                  │ ◀── Probe ──────── │ focus_next/prev  │
//!  │  units: [U0..Un] │                    └──────────────────┘
//!  │  current: i      │  Exhausted → remove_focus(i),
//!  │                  │              receive_focus_from_*(i±1)
//!  │                  │  Unit(input) → unit[current].update(input)
//!  └──────────────────┘
//! ```
//!
//! The controller never reads a unit's selection to make decisions. It only
//! calls the contract methods and trusts the probe result.

use std::fmt;

use log::{debug, info, warn};
use ratatui::text::Text;

use crate::core::action::{Effect, FocusEvent, UnitInput};
use crate::core::render::Renderable;

/// Answer to a boundary probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The unit moved its selection locally.
    Continued,
    /// The unit is already at its edge in that direction.
    Exhausted,
}

/// A widget that can hold the single keyboard focus.
///
/// Implementations own their selection exclusively. `selection()` must be
/// `None` whenever the unit is not the focused one.
pub trait Focusable: Renderable {
    /// Forward boundary probe.
    fn focus_next(&mut self) -> Probe;
    /// Backward boundary probe.
    fn focus_previous(&mut self) -> Probe;
    fn receive_focus_from_start(&mut self);
    fn receive_focus_from_end(&mut self);
    fn remove_focus(&mut self);
    /// Handle input the controller does not interpret.
    fn update(&mut self, input: UnitInput);
    fn selection(&self) -> Option<usize>;
}

/// Externally supplied composition of every widget on screen.
///
/// Receives the controller's units read-only so panes can refer to them
/// by index without sharing ownership.
pub trait Layout {
    fn compose(&self, units: &[Box<dyn Focusable>]) -> Text<'static>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// `initialize()` was called on a controller with no units.
    NoFocusableUnits,
    AlreadyInitialized,
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::NoFocusableUnits => write!(f, "no focusable units registered"),
            FocusError::AlreadyInitialized => write!(f, "focus controller already initialized"),
        }
    }
}

impl std::error::Error for FocusError {}

/// Which end of a unit focus enters from.
#[derive(Debug, Clone, Copy)]
enum Entry {
    Start,
    End,
}

/// Routes input across an ordered, fixed list of focusable units.
pub struct FocusController<L: Layout> {
    units: Vec<Box<dyn Focusable>>,
    /// `None` until `initialize()`
    current: Option<usize>,
    layout: L,
}

impl<L: Layout> FocusController<L> {
    /// Insertion order of `units` is the traversal order.
    pub fn new(units: Vec<Box<dyn Focusable>>, layout: L) -> Self {
        Self {
            units,
            current: None,
            layout,
        }
    }

    /// Focus the first unit from its start. Must run once before `handle`.
    pub fn initialize(&mut self) -> Result<(), FocusError> {
        if self.current.is_some() {
            return Err(FocusError::AlreadyInitialized);
        }
        let first = self.units.first_mut().ok_or(FocusError::NoFocusableUnits)?;
        first.receive_focus_from_start();
        self.current = Some(0);
        info!("Focus initialized on unit 0 of {}", self.units.len());
        Ok(())
    }

    pub fn handle(&mut self, event: FocusEvent) -> Effect {
        if event == FocusEvent::Quit {
            info!("Termination requested");
            return Effect::Quit;
        }

        let Some(current) = self.current else {
            warn!("Event {:?} routed before initialize(), ignoring", event);
            return Effect::None;
        };
        debug_assert!(current < self.units.len(), "focus index out of bounds");

        match event {
            FocusEvent::Advance => match self.units[current].focus_next() {
                Probe::Continued => Effect::None,
                Probe::Exhausted if current + 1 < self.units.len() => {
                    self.hand_off(current, current + 1, Entry::Start)
                }
                Probe::Exhausted => {
                    debug!("Advance absorbed: unit {} is the last unit", current);
                    Effect::None
                }
            },
            FocusEvent::Retreat => match self.units[current].focus_previous() {
                Probe::Continued => Effect::None,
                Probe::Exhausted if current > 0 => {
                    self.hand_off(current, current - 1, Entry::End)
                }
                Probe::Exhausted => {
                    debug!("Retreat absorbed: unit 0 is the first unit");
                    Effect::None
                }
            },
            FocusEvent::Unit(input) => {
                self.units[current].update(input);
                Effect::None
            }
            FocusEvent::Quit => unreachable!("quit returns before routing"),
        }
    }

    fn hand_off(&mut self, from: usize, to: usize, entry: Entry) -> Effect {
        self.units[from].remove_focus();
        self.current = Some(to);
        match entry {
            Entry::Start => self.units[to].receive_focus_from_start(),
            Entry::End => self.units[to].receive_focus_from_end(),
        }
        debug_assert!(self.units[from].selection().is_none());
        debug_assert!(self.units[to].selection().is_some());
        debug!("Focus moved from unit {} to unit {} ({:?})", from, to, entry);
        Effect::FocusMoved { from, to }
    }

    /// Index of the focused unit, `None` before `initialize()`.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn units(&self) -> &[Box<dyn Focusable>] {
        &self.units
    }

    /// Pass-through to the layout's composed rendering.
    pub fn view(&self) -> Text<'static> {
        self.layout.compose(&self.units)
    }
}
