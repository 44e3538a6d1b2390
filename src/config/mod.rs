//! Runtime settings, persisted as RON and overridable from the command line.

mod cli;
mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use cli::CliArgs;
pub use error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub assets: AssetConfig,
    pub audio: AudioConfig,
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Frame width in logical pixels. Bounce checks use this value.
    pub width: u32,
    /// Frame height in logical pixels.
    pub height: u32,
    /// Let presentation wait for vblank on top of the tick sleep.
    pub vsync: bool,
}

/// Scene tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed sleep at the end of every tick, in milliseconds.
    pub tick_ms: u64,
    /// How long the `open-window` stage keeps its window up.
    pub hold_ms: u64,
    pub label_text: String,
    pub font_size: f32,
    pub font_color: [u8; 4],
    /// Per-axis speed of the bouncing label, in pixels per tick.
    pub label_speed: i32,
    /// Sprite speed in pixels per tick.
    pub sprite_speed: i32,
}

/// Asset paths, relative to `root`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub background: PathBuf,
    /// Sprite image; also used as the window icon.
    pub sprite: PathBuf,
    pub font: PathBuf,
    pub toggle_sound: PathBuf,
    pub bounce_sound: PathBuf,
    pub music: PathBuf,
}

/// Audio configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Music volume (0.0 - 1.0).
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0).
    pub sfx_volume: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Log ticks per second once a second.
    pub show_fps: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            vsync: false,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            hold_ms: 5000,
            label_text: "SDL".to_string(),
            font_size: 80.0,
            font_color: [255, 255, 255, 255],
            label_speed: 3,
            sprite_speed: 5,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            background: PathBuf::from("images/background.png"),
            sprite: PathBuf::from("images/Go-logo.png"),
            font: PathBuf::from("fonts/freesansbold.ttf"),
            toggle_sound: PathBuf::from("sounds/Go.ogg"),
            bounce_sound: PathBuf::from("sounds/SDL.ogg"),
            music: PathBuf::from("music/freesoftwaresong-8bit.ogg"),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 1.0,
            sfx_volume: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_fps: false,
        }
    }
}

impl SceneConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl AssetConfig {
    /// Joins an asset path onto the asset root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from `path`, or write the defaults there if the file is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(path)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to `path` as pretty RON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(ConfigError::WriteError)?;
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
