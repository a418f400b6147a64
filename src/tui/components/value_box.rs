//! # ValueBox Component
//!
//! Display-only tile showing whatever is stored under a key. It reads the
//! store on every render, so a grid activation shows up on the next frame.
//!
//! On construction an unset key is seeded with `?` so the box never starts
//! out empty.

use std::sync::Arc;

use log::warn;
use ratatui::text::Text;

use crate::core::render::Renderable;
use crate::core::store::KeyValueStore;
use crate::core::tile::Tile;

/// Value written to an unset key when a box is created.
pub const UNSET_VALUE: &str = "?";

pub struct ValueBox {
    key: String,
    store: Arc<dyn KeyValueStore>,
}

impl ValueBox {
    pub fn new(key: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        let key = key.into();
        if store.get(&key).is_none_or(|v| v.is_empty()) {
            if let Err(e) = store.set(&key, UNSET_VALUE) {
                warn!("Failed to seed {:?}: {}", key, e);
            }
        }
        Self { key, store }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Renderable for ValueBox {
    fn render(&self) -> Text<'static> {
        Tile::new(self.store.get(&self.key).unwrap_or_default()).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::test_support::plain;

    #[test]
    fn test_seeds_unset_key() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let value_box = ValueBox::new("selectedValue", store.clone());
        assert_eq!(store.get("selectedValue").as_deref(), Some(UNSET_VALUE));
        assert!(plain(&value_box.render()).contains("│    ?    │"));
    }

    #[test]
    fn test_keeps_existing_value() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set("selectedValue", "C").unwrap();
        let value_box = ValueBox::new("selectedValue", store.clone());
        assert_eq!(value_box.key(), "selectedValue");
        assert_eq!(store.get("selectedValue").as_deref(), Some("C"));
        assert!(plain(&value_box.render()).contains("│    C    │"));
    }

    #[test]
    fn test_reflects_later_writes() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let value_box = ValueBox::new("k", store.clone());
        store.set("k", "@").unwrap();
        assert!(plain(&value_box.render()).contains("│    @    │"));
    }
}
