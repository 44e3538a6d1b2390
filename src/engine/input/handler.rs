use std::collections::VecDeque;

use winit::keyboard::KeyCode;
use log::debug;

use crate::engine::input::{InputEvent, Key, KeyState};

/// Collects window input between ticks: a queue of discrete events and the
/// set of keys currently held.
#[derive(Debug, Default)]
pub struct InputHandler {
    events: VecDeque<InputEvent>,
    held: KeyState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press or release. Auto-repeat presses update nothing:
    /// the key is already held and one-shot actions should not fire again.
    pub fn handle_keyboard_input_event(&mut self, keycode: KeyCode, pressed: bool, repeat: bool) {
        let Some(key) = Key::from_key_code(keycode) else {
            return;
        };
        if pressed {
            if !repeat {
                self.held.press(key);
                self.events.push_back(InputEvent::KeyDown(key));
            }
        } else {
            self.held.release(key);
        }
    }

    pub fn handle_close_requested(&mut self) {
        self.events.push_back(InputEvent::Quit);
    }

    /// Releases come to the focused window only, so an unfocused window
    /// forgets everything it thought was held.
    pub fn handle_window_focus(&mut self, focused: bool) {
        if !focused {
            self.held.release_all();
            debug!("Window unfocused, held keys released");
        }
    }

    pub fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn key_state(&self) -> KeyState {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_queues_key_down_and_holds_key() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::Space, true, false);

        assert_eq!(input.next_event(), Some(InputEvent::KeyDown(Key::Space)));
        assert_eq!(input.next_event(), None);
        assert!(input.key_state().is_held(Key::Space));

        input.handle_keyboard_input_event(KeyCode::Space, false, false);
        assert!(!input.key_state().is_held(Key::Space));
        assert_eq!(input.next_event(), None);
    }

    #[test]
    fn repeat_presses_are_dropped() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::KeyM, true, false);
        input.handle_keyboard_input_event(KeyCode::KeyM, true, true);
        input.handle_keyboard_input_event(KeyCode::KeyM, true, true);

        assert_eq!(input.next_event(), Some(InputEvent::KeyDown(Key::M)));
        assert!(!input.has_pending());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::KeyQ, true, false);
        assert!(!input.has_pending());
        assert_eq!(input.key_state(), KeyState::empty());
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::Space, true, false);
        input.handle_close_requested();
        input.handle_keyboard_input_event(KeyCode::Escape, true, false);

        assert_eq!(input.next_event(), Some(InputEvent::KeyDown(Key::Space)));
        assert_eq!(input.next_event(), Some(InputEvent::Quit));
        assert_eq!(input.next_event(), Some(InputEvent::KeyDown(Key::Escape)));
    }

    #[test]
    fn losing_focus_releases_held_keys() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::ArrowRight, true, false);
        input.handle_window_focus(false);
        assert!(!input.key_state().is_held(Key::Right));
    }
}
