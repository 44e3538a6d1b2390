//! Player implementation.

use glam::IVec2;

use crate::engine::backend::{ImageId, Rect};
use crate::engine::input::{Key, KeyState};

/// The keyboard-driven sprite. It moves only while keys are held and is not
/// kept inside the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub image: ImageId,
    pub position: IVec2,
    pub size: IVec2,
    /// Pixels per tick along each axis.
    pub speed: i32,
}

impl Player {
    pub fn new(image: ImageId, position: IVec2, size: IVec2, speed: i32) -> Self {
        Self {
            image,
            position,
            size,
            speed,
        }
    }

    /// Movement for one tick. Axes are independent, so opposing keys cancel.
    pub fn displacement(keys: &KeyState, speed: i32) -> IVec2 {
        let mut direction = IVec2::ZERO;
        if keys.any_held(&[Key::Left, Key::A]) {
            direction.x -= 1;
        }
        if keys.any_held(&[Key::Right, Key::D]) {
            direction.x += 1;
        }
        if keys.any_held(&[Key::Up, Key::W]) {
            direction.y -= 1;
        }
        if keys.any_held(&[Key::Down, Key::S]) {
            direction.y += 1;
        }
        direction * speed
    }

    pub fn apply_keys(&mut self, keys: &KeyState) {
        self.position += Self::displacement(keys, self.speed);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(held: &[Key]) -> KeyState {
        held.iter().copied().collect()
    }

    #[test]
    fn right_moves_by_speed() {
        assert_eq!(Player::displacement(&keys(&[Key::Right]), 5), IVec2::new(5, 0));
    }

    #[test]
    fn opposing_keys_cancel() {
        assert_eq!(Player::displacement(&keys(&[Key::Left, Key::Right]), 5), IVec2::ZERO);
        assert_eq!(Player::displacement(&keys(&[Key::A, Key::Right]), 5), IVec2::ZERO);
        assert_eq!(Player::displacement(&keys(&[Key::W, Key::Down]), 5), IVec2::ZERO);
    }

    #[test]
    fn arrow_and_letter_on_same_side_do_not_stack() {
        assert_eq!(Player::displacement(&keys(&[Key::Up, Key::W]), 5), IVec2::new(0, -5));
    }

    #[test]
    fn diagonal_moves_both_axes() {
        let mut player = Player::new(ImageId(0), IVec2::new(10, 10), IVec2::new(32, 32), 5);
        player.apply_keys(&keys(&[Key::D, Key::S]));
        assert_eq!(player.position, IVec2::new(15, 15));
    }

    #[test]
    fn no_clamping_at_frame_edge() {
        let mut player = Player::new(ImageId(0), IVec2::ZERO, IVec2::new(32, 32), 5);
        player.apply_keys(&keys(&[Key::Left, Key::Up]));
        assert_eq!(player.position, IVec2::new(-5, -5));
    }
}
