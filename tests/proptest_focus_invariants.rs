//! Focus invariants over random event sequences.

use focusbox::core::action::{FocusEvent, UnitInput};
use focusbox::core::config::{DEFAULT_SELECT_KEY, ResolvedConfig, default_widgets};
use focusbox::core::grid::GRID_ITEMS;
use focusbox::core::store::{KeyValueStore, MemoryStore};
use focusbox::tui::build_controller;
use proptest::prelude::*;
use std::sync::Arc;

fn event_strategy() -> impl Strategy<Value = FocusEvent> {
    prop_oneof![
        3 => Just(FocusEvent::Advance),
        3 => Just(FocusEvent::Retreat),
        1 => Just(FocusEvent::Unit(UnitInput::MoveDown)),
        1 => Just(FocusEvent::Unit(UnitInput::MoveUp)),
        1 => Just(FocusEvent::Unit(UnitInput::Activate)),
        1 => any::<char>().prop_map(|c| FocusEvent::Unit(UnitInput::Key(c))),
    ]
}

fn demo_config() -> ResolvedConfig {
    ResolvedConfig {
        select_key: DEFAULT_SELECT_KEY.to_string(),
        store_path: None,
        widgets: default_widgets(),
    }
}

proptest! {
    #[test]
    fn exactly_one_unit_holds_focus(events in proptest::collection::vec(event_strategy(), 0..200)) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut controller = build_controller(&demo_config(), store);
        controller.initialize().unwrap();

        for event in events {
            controller.handle(event);

            let current = controller.current_index().unwrap();
            prop_assert!(current < controller.units().len());

            for (i, unit) in controller.units().iter().enumerate() {
                match unit.selection() {
                    Some(selected) => {
                        prop_assert_eq!(i, current);
                        prop_assert!(selected < GRID_ITEMS);
                    }
                    None => prop_assert_ne!(i, current),
                }
            }
        }
    }

    #[test]
    fn advance_then_retreat_returns_to_start(steps in 0usize..12) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut controller = build_controller(&demo_config(), store);
        controller.initialize().unwrap();

        // 3 units of 4 items: 11 linear positions past the first
        for _ in 0..steps {
            controller.handle(FocusEvent::Advance);
        }
        prop_assert_eq!(controller.current_index(), Some(steps / GRID_ITEMS));
        prop_assert_eq!(
            controller.units()[steps / GRID_ITEMS].selection(),
            Some(steps % GRID_ITEMS)
        );

        for _ in 0..steps {
            controller.handle(FocusEvent::Retreat);
        }
        prop_assert_eq!(controller.current_index(), Some(0));
        prop_assert_eq!(controller.units()[0].selection(), Some(0));
    }
}
