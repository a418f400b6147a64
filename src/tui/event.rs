use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use crate::core::action::{FocusEvent, UnitInput};

/// Block until the next terminal event.
///
/// Returns `None` for events that only need a redraw (resize, focus, mouse)
/// or keys with no binding.
pub fn next_event() -> io::Result<Option<FocusEvent>> {
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Ok(translate_key(key_event))
        }
        _ => Ok(None),
    }
}

/// Map a key press to a focus event. Releases and repeats are dropped.
pub fn translate_key(key_event: KeyEvent) -> Option<FocusEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(FocusEvent::Quit),
        (_, KeyCode::Esc) => Some(FocusEvent::Quit),
        (_, KeyCode::Right) => Some(FocusEvent::Advance),
        (_, KeyCode::Left) => Some(FocusEvent::Retreat),
        (_, KeyCode::Down) => Some(UnitInput::MoveDown.into()),
        (_, KeyCode::Up) => Some(UnitInput::MoveUp.into()),
        (_, KeyCode::Enter) => Some(UnitInput::Activate.into()),
        (_, KeyCode::Char(c)) => Some(UnitInput::Key(c).into()),
        _ => None,
    }
}
