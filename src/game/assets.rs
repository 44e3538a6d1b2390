//! Builds a stage's scene from the files named in the config.

use glam::IVec2;
use log::info;
use winit::window::Icon;

use crate::config::Config;
use crate::engine::audio::Mixer;
use crate::engine::backend::AudioBackend;
use crate::engine::graphics::{text, texture, Renderer};
use crate::error::StartupError;
use crate::game::player::Player;
use crate::game::scene::{Controls, Cues, MovingRect, Scene};
use crate::game::stage::Stage;

/// The sprite image doubles as the window icon.
pub fn window_icon(config: &Config) -> Result<Icon, StartupError> {
    let rgba = texture::load_rgba(&config.assets.resolve(&config.assets.sprite))?;
    let (width, height) = rgba.dimensions();
    Ok(Icon::from_rgba(rgba.into_raw(), width, height)?)
}

/// Loads what `stage` needs and starts the music if it has any.
///
/// Labels and the sprite start in the top-left corner. The label moves
/// diagonally at `label_speed` on both axes.
pub fn load_scene(
    stage: Stage,
    config: &Config,
    renderer: &mut Renderer,
    mixer: Option<&mut Mixer>,
    seed: u64,
) -> Result<Scene, StartupError> {
    let features = stage.features();
    let assets = &config.assets;
    let mut scene = Scene::new(config.window.width as i32, config.window.height as i32, seed);
    scene.state.show_fps = config.debug.show_fps;
    scene.controls = Controls {
        color_toggle: features.color_toggle,
        music_toggle: features.audio,
    };

    if features.background {
        let rgba = texture::load_rgba(&assets.resolve(&assets.background))?;
        scene.background = Some(renderer.upload(&rgba, "Background"));
    }

    if features.label {
        let font = text::load_font(&assets.resolve(&assets.font))?;
        let rgba = text::render_line(
            &font,
            &config.scene.label_text,
            config.scene.font_size,
            config.scene.font_color,
        )?;
        let size = IVec2::new(rgba.width() as i32, rgba.height() as i32);
        let image = renderer.upload(&rgba, "Label");
        let speed = config.scene.label_speed;
        scene
            .labels
            .push(MovingRect::new(image, IVec2::ZERO, size, IVec2::splat(speed)));
        info!("Label {:?} is {}x{}", config.scene.label_text, size.x, size.y);
    }

    if features.sprite {
        let rgba = texture::load_rgba(&assets.resolve(&assets.sprite))?;
        let size = IVec2::new(rgba.width() as i32, rgba.height() as i32);
        let image = renderer.upload(&rgba, "Sprite");
        scene.player = Some(Player::new(image, IVec2::ZERO, size, config.scene.sprite_speed));
    }

    if let Some(mixer) = mixer.filter(|_| features.audio) {
        let toggle = mixer.load_clip(&assets.resolve(&assets.toggle_sound))?;
        let bounce = mixer.load_clip(&assets.resolve(&assets.bounce_sound))?;
        let music = mixer.load_track(&assets.resolve(&assets.music))?;
        scene.cues = Cues {
            toggle: Some(toggle),
            bounce: Some(bounce),
        };
        mixer.play_music_looping(music).map_err(StartupError::Music)?;
    }

    Ok(scene)
}
