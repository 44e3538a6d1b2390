//! Everything the scene loop mutates, in one place.

pub mod bouncer;

use glam::IVec2;

use crate::engine::backend::{ClipId, ImageId};
use crate::game::player::Player;
use crate::game::state::GameState;

pub use bouncer::MovingRect;

/// Sounds bound to scene events. Unbound cues are skipped silently.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cues {
    /// Played when the draw colour is randomised.
    pub toggle: Option<ClipId>,
    /// Played once per axis a label bounces on.
    pub bounce: Option<ClipId>,
}

/// Which one-shot keys the scene responds to. Escape always quits.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Controls {
    /// Space randomises the draw colour.
    pub color_toggle: bool,
    /// M pauses and resumes the music.
    pub music_toggle: bool,
}

pub struct Scene {
    /// Logical frame size in pixels.
    pub frame: IVec2,
    pub background: Option<ImageId>,
    pub labels: Vec<MovingRect>,
    pub player: Option<Player>,
    pub cues: Cues,
    pub controls: Controls,
    pub state: GameState,
}

impl Scene {
    /// An empty black frame with no controls but Escape.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        Self {
            frame: IVec2::new(width, height),
            background: None,
            labels: Vec::new(),
            player: None,
            cues: Cues::default(),
            controls: Controls::default(),
            state: GameState::new(seed),
        }
    }
}
