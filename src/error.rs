//! Error types for start-up and for the running loop.

use std::io::Write;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Failures that happen before the scene loop starts.
///
/// Each variant names the step that failed. Whatever was acquired before the
/// failure is released by `Drop` as the caller unwinds.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("error loading config: {0}")]
    Config(#[from] ConfigError),

    #[error("error creating event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("error creating window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop never resumed, no window was created")]
    NoWindow,

    #[error("error creating window icon: {0}")]
    Icon(#[from] winit::window::BadIcon),

    #[error("error creating surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter found")]
    NoAdapter,

    #[error("error requesting device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("error loading image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error opening font {path}: {source}")]
    Font {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    #[error("label {0:?} rendered to an empty image")]
    EmptyLabel(String),

    #[error("error opening audio: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("error loading sound {path}: {source}")]
    Sound {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("error playing music: {0}")]
    Music(#[source] RuntimeError),
}

/// Failures inside the scene loop. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("error acquiring frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("no image with id {0}")]
    UnknownImage(usize),

    #[error("no sound with id {0}")]
    UnknownClip(usize),

    #[error("no music track with id {0}")]
    UnknownTrack(usize),

    #[error("error playing sound: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("error decoding sound: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Either kind of failure, as seen by the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Process exit code: 1 for start-up failures, 2 for failures in the loop.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Startup(_) => 1,
            Error::Runtime(_) => 2,
        }
    }

    /// Logs the failure and writes it to `out`. The written line does not go
    /// through the log filter, so it is there even with logging turned off.
    pub fn report(&self, out: &mut impl Write) {
        log::error!("{}", self);
        // Nothing left to report a failed diagnostic write to.
        let _ = writeln!(out, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_failures_exit_with_one() {
        assert_eq!(Error::from(StartupError::NoAdapter).exit_code(), 1);
        assert_eq!(Error::from(StartupError::NoWindow).exit_code(), 1);
    }

    #[test]
    fn config_failures_exit_with_one() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let startup = StartupError::from(ConfigError::ReadError(io));
        assert_eq!(Error::from(startup).exit_code(), 1);
    }

    #[test]
    fn runtime_failures_exit_with_two() {
        assert_eq!(Error::from(RuntimeError::UnknownImage(0)).exit_code(), 2);
        assert_eq!(Error::from(RuntimeError::UnknownClip(3)).exit_code(), 2);
    }

    #[test]
    fn report_writes_the_message_without_a_logger() {
        let mut out = Vec::new();
        Error::from(StartupError::NoAdapter).report(&mut out);
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "no compatible graphics adapter found\n");
    }

    #[test]
    fn report_includes_the_failing_path() {
        let mut out = Vec::new();
        let error = Error::from(StartupError::Io {
            path: PathBuf::from("assets/missing.ttf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        error.report(&mut out);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("assets/missing.ttf"));
        assert!(written.ends_with('\n'));
    }
}
