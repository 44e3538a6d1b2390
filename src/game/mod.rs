//! Scene logic: entities, the loop that drives them and the stages.

pub mod app;
pub mod assets;
pub mod player;
pub mod scene;
pub mod scene_loop;
pub mod stage;
pub mod state;

// Re-export commonly used types
pub use player::Player;
pub use scene::{Controls, Cues, MovingRect, Scene};
pub use scene_loop::{FramePacer, TickOutcome};
pub use stage::{Features, Stage};
pub use state::GameState;
