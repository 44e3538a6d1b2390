//! The seams between the scene loop and the platform.
//!
//! The loop only ever talks to these traits. The winit/wgpu/rodio types in the
//! rest of `engine` implement them for a real window; tests implement them with
//! recorders.

use crate::engine::input::{InputEvent, KeyState};
use crate::error::RuntimeError;

/// Handle to an image uploaded to a [`RenderBackend`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Handle to a one-shot sound loaded into an [`AudioBackend`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClipId(pub usize);

/// Handle to a music track loaded into an [`AudioBackend`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(pub usize);

/// An 8-bit-per-channel colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Integer rectangle in frame pixels, origin top-left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Where an image is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dest {
    /// Stretched over the whole frame.
    FullFrame,
    Rect(Rect),
}

pub trait RenderBackend {
    /// Colour used by the next [`clear`](RenderBackend::clear).
    fn set_draw_color(&mut self, color: Rgba);

    fn clear(&mut self);

    fn draw(&mut self, image: ImageId, dest: Dest) -> Result<(), RuntimeError>;

    /// Shows everything drawn since the last clear, all at once.
    fn present(&mut self) -> Result<(), RuntimeError>;
}

pub trait InputSource {
    /// Next pending event, or `None` once the queue is empty. Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Keys held right now.
    fn key_state(&self) -> KeyState;
}

/// Fire-and-forget playback. Nothing here waits for a sound to finish.
pub trait AudioBackend {
    fn play_once(&mut self, clip: ClipId) -> Result<(), RuntimeError>;

    fn play_music_looping(&mut self, track: TrackId) -> Result<(), RuntimeError>;

    fn pause_music(&mut self);

    fn resume_music(&mut self);

    fn is_music_paused(&self) -> bool;

    fn stop_all(&mut self);
}

/// Audio backend for stages that never open an output device.
#[derive(Debug, Default)]
pub struct Silence;

impl AudioBackend for Silence {
    fn play_once(&mut self, _clip: ClipId) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn play_music_looping(&mut self, _track: TrackId) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn pause_music(&mut self) {}

    fn resume_music(&mut self) {}

    fn is_music_paused(&self) -> bool {
        false
    }

    fn stop_all(&mut self) {}
}
