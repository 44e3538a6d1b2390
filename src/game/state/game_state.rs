//! Game state management implementation.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::backend::Rgba;

/// Mutable per-run state that is not an entity: the draw colour, the colour
/// generator and the tick counter behind the FPS log.
pub struct GameState {
    pub draw_color: Rgba,
    rng: StdRng,
    pub show_fps: bool,
    pub last_fps_print: Instant,
    pub frame_count: u32,
    pub last_fps: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            draw_color: Rgba::BLACK,
            rng: StdRng::seed_from_u64(seed),
            show_fps: false,
            last_fps_print: Instant::now(),
            frame_count: 0,
            last_fps: 0,
        }
    }

    /// Picks a new opaque draw colour and returns it.
    pub fn randomize_draw_color(&mut self) -> Rgba {
        self.draw_color = Rgba::opaque(self.rng.gen(), self.rng.gen(), self.rng.gen());
        self.draw_color
    }

    /// Counts a tick towards the FPS log. Nothing is counted while it is off.
    pub fn update_frame_count(&mut self) {
        if self.show_fps {
            self.frame_count += 1;
        }
    }

    /// Returns the tick count of the last second once a second has passed.
    pub fn update_fps_display(&mut self) -> Option<u32> {
        if !self.show_fps {
            return None;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print);

        if elapsed.as_secs_f32() >= 1.0 {
            self.last_fps = self.frame_count;
            self.frame_count = 0;
            self.last_fps_print = now;
            Some(self.last_fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_colours() {
        let mut a = GameState::new(7);
        let mut b = GameState::new(7);
        for _ in 0..10 {
            assert_eq!(a.randomize_draw_color(), b.randomize_draw_color());
        }
    }

    #[test]
    fn random_colours_are_opaque() {
        let mut state = GameState::new(1);
        for _ in 0..50 {
            assert_eq!(state.randomize_draw_color().a, 255);
        }
    }

    #[test]
    fn starts_black() {
        assert_eq!(GameState::new(0).draw_color, Rgba::BLACK);
    }

    #[test]
    fn fps_is_silent_when_disabled() {
        let mut state = GameState::new(0);
        state.update_frame_count();
        state.last_fps_print = Instant::now() - std::time::Duration::from_secs(2);
        assert_eq!(state.update_fps_display(), None);
    }

    #[test]
    fn ticks_are_not_counted_when_fps_is_off() {
        let mut state = GameState::new(0);
        for _ in 0..1000 {
            state.update_frame_count();
        }
        assert_eq!(state.frame_count, 0);
    }

    #[test]
    fn fps_reports_and_resets_after_a_second() {
        let mut state = GameState::new(0);
        state.show_fps = true;
        for _ in 0..60 {
            state.update_frame_count();
        }
        state.last_fps_print = Instant::now() - std::time::Duration::from_secs(1);
        assert_eq!(state.update_fps_display(), Some(60));
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.update_fps_display(), None);
    }
}
