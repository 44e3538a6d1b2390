//! rodio-backed audio output.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::engine::backend::{AudioBackend, ClipId, TrackId};
use crate::error::{RuntimeError, StartupError};

/// Encoded audio kept in memory and decoded afresh for every playback.
#[derive(Clone)]
struct EncodedAudio(Arc<[u8]>);

impl EncodedAudio {
    fn load(path: &Path) -> Result<Self, StartupError> {
        let bytes = std::fs::read(path).map_err(|source| StartupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let audio = Self(bytes.into());
        // Decode the header now so a bad file fails at start-up.
        audio.decoder().map_err(|source| StartupError::Sound {
            path: path.to_path_buf(),
            source,
        })?;
        info!("[audio] Loaded {}", path.display());
        Ok(audio)
    }

    fn cursor(&self) -> Cursor<Arc<[u8]>> {
        Cursor::new(Arc::clone(&self.0))
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, rodio::decoder::DecoderError> {
        Decoder::new(self.cursor())
    }
}

/// Owns the output stream. One-shot sounds each get their own sink so they
/// overlap freely; music has a single sink that can be paused.
pub struct Mixer {
    clips: Vec<EncodedAudio>,
    tracks: Vec<EncodedAudio>,
    effects: Vec<Sink>,
    music: Option<Sink>,
    music_volume: f32,
    sfx_volume: f32,
    handle: OutputStreamHandle,
    // Dropped last: sinks stop producing sound once the stream is gone.
    _stream: OutputStream,
}

impl Mixer {
    pub fn new(music_volume: f32, sfx_volume: f32) -> Result<Self, StartupError> {
        let (stream, handle) = OutputStream::try_default()?;
        info!("[audio] Output stream opened");
        Ok(Self {
            clips: Vec::new(),
            tracks: Vec::new(),
            effects: Vec::new(),
            music: None,
            music_volume,
            sfx_volume,
            handle,
            _stream: stream,
        })
    }

    pub fn load_clip(&mut self, path: &Path) -> Result<ClipId, StartupError> {
        self.clips.push(EncodedAudio::load(path)?);
        Ok(ClipId(self.clips.len() - 1))
    }

    pub fn load_track(&mut self, path: &Path) -> Result<TrackId, StartupError> {
        self.tracks.push(EncodedAudio::load(path)?);
        Ok(TrackId(self.tracks.len() - 1))
    }
}

impl AudioBackend for Mixer {
    fn play_once(&mut self, clip: ClipId) -> Result<(), RuntimeError> {
        let audio = self
            .clips
            .get(clip.0)
            .ok_or(RuntimeError::UnknownClip(clip.0))?;
        self.effects.retain(|sink| !sink.empty());

        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.sfx_volume);
        sink.append(audio.decoder()?);
        self.effects.push(sink);
        Ok(())
    }

    fn play_music_looping(&mut self, track: TrackId) -> Result<(), RuntimeError> {
        let audio = self
            .tracks
            .get(track.0)
            .ok_or(RuntimeError::UnknownTrack(track.0))?;
        if let Some(previous) = self.music.take() {
            previous.stop();
        }

        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.music_volume);
        sink.append(Decoder::new_looped(audio.cursor())?);
        self.music = Some(sink);
        debug!("[audio] Music track {} started", track.0);
        Ok(())
    }

    fn pause_music(&mut self) {
        if let Some(music) = &self.music {
            music.pause();
        }
    }

    fn resume_music(&mut self) {
        if let Some(music) = &self.music {
            music.play();
        }
    }

    fn is_music_paused(&self) -> bool {
        self.music.as_ref().is_some_and(Sink::is_paused)
    }

    fn stop_all(&mut self) {
        if let Some(music) = self.music.take() {
            music.stop();
        }
        for sink in self.effects.drain(..) {
            sink.stop();
        }
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        self.stop_all();
        debug!("[audio] Playback stopped");
    }
}
