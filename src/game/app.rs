//! Start-up and shutdown around the scene loop.

use log::info;

use crate::config::Config;
use crate::engine::audio::Mixer;
use crate::engine::backend::{AudioBackend, Silence};
use crate::engine::graphics::Renderer;
use crate::engine::window::WindowManager;
use crate::error::{Error, StartupError};
use crate::game::assets;
use crate::game::scene_loop::{self, FramePacer};
use crate::game::stage::Stage;

/// Acquires the window, renderer, assets and audio for `stage`, runs it, and
/// releases everything in reverse order on the way out, on every path.
pub fn run(stage: Stage, config: &Config, seed: u64) -> Result<(), Error> {
    let features = stage.features();
    info!("Starting stage {:?} ({})", stage, stage.title());

    let icon = if features.icon {
        Some(assets::window_icon(config)?)
    } else {
        None
    };
    let mut window = WindowManager::new(
        stage.title(),
        config.window.width,
        config.window.height,
        icon,
    )?;
    let handle = window.window().cloned().ok_or(StartupError::NoWindow)?;

    let mut renderer = pollster::block_on(Renderer::new(
        handle,
        config.window.width,
        config.window.height,
        config.window.vsync,
    ))?;

    let mut mixer = if features.audio {
        Some(Mixer::new(config.audio.music_volume, config.audio.sfx_volume)?)
    } else {
        None
    };

    let mut scene = assets::load_scene(stage, config, &mut renderer, mixer.as_mut(), seed)?;

    if !stage.runs_loop() {
        scene_loop::hold(&scene, &mut renderer, config.scene.hold())?;
        return Ok(());
    }

    let mut silence = Silence;
    let audio: &mut dyn AudioBackend = match mixer.as_mut() {
        Some(mixer) => mixer,
        None => &mut silence,
    };
    let pacer = FramePacer::new(config.scene.tick());
    let ticks = scene_loop::run(&mut scene, &mut window, &mut renderer, audio, &pacer)?;
    info!("Stage {:?} finished after {} ticks", stage, ticks);
    Ok(())
}
