//! Keys and events the scene understands.

use winit::keyboard::KeyCode;

/// The closed set of keys the scene reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Escape,
    Space,
    M,
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
}

impl Key {
    pub const ALL: [Key; 11] = [
        Key::Escape,
        Key::Space,
        Key::M,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::A,
        Key::D,
        Key::W,
        Key::S,
    ];

    /// Maps a physical key code, ignoring keys the scene has no use for.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::KeyM => Key::M,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyS => Key::S,
            _ => return None,
        };
        Some(key)
    }

    fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// Discrete input drained at the top of every tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Snapshot of held keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState(u16);

impl KeyState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn release_all(&mut self) {
        self.0 = 0;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// True if any of `keys` is held.
    pub fn any_held(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&key| self.is_held(key))
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter().fold(KeyState::empty(), KeyState::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_have_distinct_bits() {
        let all: KeyState = Key::ALL.into_iter().collect();
        for key in Key::ALL {
            assert!(all.is_held(key));
            let mut without = all;
            without.release(key);
            assert!(!without.is_held(key));
            assert_eq!(
                Key::ALL.iter().filter(|&&k| without.is_held(k)).count(),
                Key::ALL.len() - 1
            );
        }
    }

    #[test]
    fn release_all_clears_snapshot() {
        let mut state = KeyState::empty().with(Key::Left).with(Key::W);
        state.release_all();
        assert_eq!(state, KeyState::empty());
    }

    #[test]
    fn maps_arrows_and_wasd() {
        assert_eq!(Key::from_key_code(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(Key::from_key_code(KeyCode::KeyD), Some(Key::D));
        assert_eq!(Key::from_key_code(KeyCode::KeyM), Some(Key::M));
        assert_eq!(Key::from_key_code(KeyCode::KeyQ), None);
    }
}
