//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::game::Stage;

/// Command-line arguments.
///
/// CLI values override settings loaded from the config file.
#[derive(Parser, Debug)]
#[command(name = "bounce-scene", about = "A bouncing label, a sprite and some sound")]
pub struct CliArgs {
    /// Which tutorial stage to run.
    #[arg(long, value_enum, default_value_t = Stage::SoundEffects)]
    pub stage: Stage,

    /// Path to a RON config file. Written with defaults if missing.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the asset paths are relative to.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for the draw colour generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sleep at the end of each tick, in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref root) = args.assets {
            self.assets.root = root.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ms) = args.tick_ms {
            self.scene.tick_ms = ms;
        }
    }
}
