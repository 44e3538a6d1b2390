//! The fixed-tick loop: input, movement, bounce cues, draw, sleep.

use std::time::Duration;

use log::{debug, info};

use crate::engine::backend::{AudioBackend, Dest, InputSource, RenderBackend};
use crate::engine::input::{InputEvent, Key};
use crate::error::RuntimeError;
use crate::game::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// Sleeps a fixed amount after every tick. There is no catch-up: a slow tick
/// makes the loop slower, not the motion bigger.
#[derive(Copy, Clone, Debug)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn wait(&self) {
        if !self.budget.is_zero() {
            std::thread::sleep(self.budget);
        }
    }
}

/// Runs ticks until the player quits. Returns the number of completed ticks.
pub fn run<I, R, A>(
    scene: &mut Scene,
    input: &mut I,
    renderer: &mut R,
    audio: &mut A,
    pacer: &FramePacer,
) -> Result<u64, RuntimeError>
where
    I: InputSource + ?Sized,
    R: RenderBackend + ?Sized,
    A: AudioBackend + ?Sized,
{
    renderer.set_draw_color(scene.state.draw_color);
    let mut ticks = 0;
    loop {
        if tick(scene, input, renderer, audio)? == TickOutcome::Exit {
            info!("Exit requested after {} ticks", ticks);
            return Ok(ticks);
        }
        ticks += 1;
        scene.state.update_frame_count();
        if let Some(fps) = scene.state.update_fps_display() {
            info!("{} ticks per second", fps);
        }
        pacer.wait();
    }
}

/// One pass of the loop, without the trailing sleep.
pub fn tick<I, R, A>(
    scene: &mut Scene,
    input: &mut I,
    renderer: &mut R,
    audio: &mut A,
) -> Result<TickOutcome, RuntimeError>
where
    I: InputSource + ?Sized,
    R: RenderBackend + ?Sized,
    A: AudioBackend + ?Sized,
{
    while let Some(event) = input.poll_event() {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Ok(TickOutcome::Exit),
            InputEvent::KeyDown(Key::Space) if scene.controls.color_toggle => {
                let color = scene.state.randomize_draw_color();
                debug!("Draw colour set to {:?}", color);
                renderer.set_draw_color(color);
                if let Some(cue) = scene.cues.toggle {
                    audio.play_once(cue)?;
                }
            }
            InputEvent::KeyDown(Key::M) if scene.controls.music_toggle => {
                toggle_music(audio);
            }
            InputEvent::KeyDown(_) => {}
        }
    }

    let keys = input.key_state();
    if let Some(player) = scene.player.as_mut() {
        player.apply_keys(&keys);
    }

    for label in &mut scene.labels {
        label.advance();
    }
    for label in &mut scene.labels {
        for _ in 0..label.bounce(scene.frame) {
            if let Some(cue) = scene.cues.bounce {
                audio.play_once(cue)?;
            }
        }
    }

    draw(scene, renderer)?;
    Ok(TickOutcome::Continue)
}

/// Clears, draws back to front and presents.
pub fn draw<R>(scene: &Scene, renderer: &mut R) -> Result<(), RuntimeError>
where
    R: RenderBackend + ?Sized,
{
    renderer.clear();
    if let Some(background) = scene.background {
        renderer.draw(background, Dest::FullFrame)?;
    }
    for label in &scene.labels {
        renderer.draw(label.image, Dest::Rect(label.rect()))?;
    }
    if let Some(player) = &scene.player {
        renderer.draw(player.image, Dest::Rect(player.rect()))?;
    }
    renderer.present()
}

/// Pauses playing music or resumes paused music.
pub fn toggle_music<A>(audio: &mut A)
where
    A: AudioBackend + ?Sized,
{
    if audio.is_music_paused() {
        audio.resume_music();
        debug!("Music resumed");
    } else {
        audio.pause_music();
        debug!("Music paused");
    }
}

/// Presents a single frame and keeps it up for `duration` without handling
/// any input.
pub fn hold<R>(scene: &Scene, renderer: &mut R, duration: Duration) -> Result<(), RuntimeError>
where
    R: RenderBackend + ?Sized,
{
    renderer.set_draw_color(scene.state.draw_color);
    draw(scene, renderer)?;
    info!("Holding window for {:?}", duration);
    std::thread::sleep(duration);
    Ok(())
}
