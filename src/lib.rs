//! Library entry point: a bouncing label, a keyboard sprite and a few sounds
//! on a fixed-tick loop.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;

// Re-export main types for convenience
pub use config::{CliArgs, Config};
pub use error::{Error, RuntimeError, StartupError};
pub use game::{Scene, Stage};
