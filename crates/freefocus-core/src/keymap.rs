#![forbid(unsafe_code)]

//! Key-code to direction mapping.
//!
//! The default table uses DOM `keyCode` values for the arrow keys. Hosts
//! with other key sources (remote controls, gamepads) rebind entries.

use ahash::AHashMap;

use crate::direction::Direction;

/// DOM key code of the left arrow key.
pub const KEY_LEFT: u32 = 37;
/// DOM key code of the up arrow key.
pub const KEY_UP: u32 = 38;
/// DOM key code of the right arrow key.
pub const KEY_RIGHT: u32 = 39;
/// DOM key code of the down arrow key.
pub const KEY_DOWN: u32 = 40;

/// Lookup table from key codes to navigation directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: AHashMap<u32, Direction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KEY_LEFT, Direction::Left);
        map.bind(KEY_UP, Direction::Up);
        map.bind(KEY_RIGHT, Direction::Right);
        map.bind(KEY_DOWN, Direction::Down);
        map
    }
}

impl KeyMap {
    /// Arrow-key table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: AHashMap::new(),
        }
    }

    /// Bind `key` to `direction`, returning the previous binding.
    pub fn bind(&mut self, key: u32, direction: Direction) -> Option<Direction> {
        self.bindings.insert(key, direction)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: u32) -> Option<Direction> {
        self.bindings.remove(&key)
    }

    /// Direction bound to `key`, if any.
    #[must_use]
    pub fn direction(&self, key: u32) -> Option<Direction> {
        self.bindings.get(&key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
