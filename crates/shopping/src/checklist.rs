use std::collections::HashSet;

use crate::normalize::ItemKey;

/// Check-off state for the current session. Never persisted.
#[derive(Clone, Debug, Default)]
pub struct ShoppingChecks {
    checked: HashSet<ItemKey>,
}

impl ShoppingChecks {
    pub fn is_checked(&self, key: &ItemKey) -> bool {
        self.checked.contains(key)
    }

    pub fn set(&mut self, key: ItemKey, checked: bool) {
        if checked {
            self.checked.insert(key);
        } else {
            self.checked.remove(&key);
        }
    }

    /// Flips the state of `key` and returns the new state.
    pub fn toggle(&mut self, key: ItemKey) -> bool {
        let checked = !self.is_checked(&key);
        self.set(key, checked);
        checked
    }

    pub fn reset(&mut self) {
        self.checked.clear();
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}
