//! Input handling module
//! This module turns keyboard and window events into the scene's event queue
//! and held-key snapshot.

pub mod handler;
pub mod key;

pub use handler::InputHandler;
pub use key::{InputEvent, Key, KeyState};
