//! Headless backends for driving the scene loop in tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use bounce_scene::engine::backend::{
    AudioBackend, ClipId, Dest, ImageId, InputSource, RenderBackend, Rgba, TrackId,
};
use bounce_scene::engine::input::{InputEvent, KeyState};
use bounce_scene::RuntimeError;

/// Serves queued events, then the same held keys every tick.
#[derive(Default)]
pub struct ScriptedInput {
    pub events: VecDeque<InputEvent>,
    pub keys: KeyState,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn holding(keys: KeyState) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.polls += 1;
        self.events.pop_front()
    }

    fn key_state(&self) -> KeyState {
        self.keys
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    SetDrawColor(Rgba),
    Clear,
    Draw(ImageId, Dest),
    Present,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == RenderCall::Present).count()
    }

    pub fn draws(&self) -> Vec<(ImageId, Dest)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::Draw(image, dest) => Some((*image, *dest)),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for RecordingRenderer {
    fn set_draw_color(&mut self, color: Rgba) {
        self.calls.push(RenderCall::SetDrawColor(color));
    }

    fn clear(&mut self) {
        self.calls.push(RenderCall::Clear);
    }

    fn draw(&mut self, image: ImageId, dest: Dest) -> Result<(), RuntimeError> {
        self.calls.push(RenderCall::Draw(image, dest));
        Ok(())
    }

    fn present(&mut self) -> Result<(), RuntimeError> {
        self.calls.push(RenderCall::Present);
        Ok(())
    }
}

/// Records what was played and keeps a paused flag for the music.
#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<ClipId>,
    pub music: Option<TrackId>,
    pub music_paused: bool,
    pub stopped: bool,
}

impl AudioBackend for RecordingAudio {
    fn play_once(&mut self, clip: ClipId) -> Result<(), RuntimeError> {
        self.played.push(clip);
        Ok(())
    }

    fn play_music_looping(&mut self, track: TrackId) -> Result<(), RuntimeError> {
        self.music = Some(track);
        self.music_paused = false;
        Ok(())
    }

    fn pause_music(&mut self) {
        if self.music.is_some() {
            self.music_paused = true;
        }
    }

    fn resume_music(&mut self) {
        self.music_paused = false;
    }

    fn is_music_paused(&self) -> bool {
        self.music_paused
    }

    fn stop_all(&mut self) {
        self.music = None;
        self.stopped = true;
    }
}

/// Renderer whose present always fails, for checking error propagation.
pub struct FailingRenderer;

impl RenderBackend for FailingRenderer {
    fn set_draw_color(&mut self, _color: Rgba) {}

    fn clear(&mut self) {}

    fn draw(&mut self, _image: ImageId, _dest: Dest) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), RuntimeError> {
        Err(RuntimeError::UnknownImage(99))
    }
}
