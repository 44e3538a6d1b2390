//! Rectangles that move on their own and bounce off the frame edges.

use glam::IVec2;

use crate::engine::backend::{ImageId, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct MovingRect {
    pub image: ImageId,
    pub position: IVec2,
    pub size: IVec2,
    /// Pixels per tick. Only the signs ever change.
    pub velocity: IVec2,
}

impl MovingRect {
    pub fn new(image: ImageId, position: IVec2, size: IVec2, velocity: IVec2) -> Self {
        Self {
            image,
            position,
            size,
            velocity,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Turns the velocity back inward on every axis where the rectangle has
    /// left `[0, frame]` and is still heading out. Returns how many axes
    /// bounced.
    ///
    /// Position is not clamped, so the rectangle may sit up to one step past
    /// the edge for a tick. It is already heading back by then, so the same
    /// crossing never bounces twice.
    pub fn bounce(&mut self, frame: IVec2) -> u32 {
        let mut bounced = 0;
        for axis in 0..2 {
            if bounce_axis(
                &mut self.velocity[axis],
                self.position[axis],
                self.size[axis],
                frame[axis],
            ) {
                bounced += 1;
            }
        }
        bounced
    }
}

fn bounce_axis(velocity: &mut i32, position: i32, extent: i32, limit: i32) -> bool {
    let leaving_low = position < 0 && *velocity < 0;
    let leaving_high = position + extent > limit && *velocity > 0;
    if leaving_low || leaving_high {
        *velocity = -*velocity;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: IVec2 = IVec2::new(800, 600);

    fn label(x: i32, y: i32, vx: i32, vy: i32) -> MovingRect {
        MovingRect::new(ImageId(0), IVec2::new(x, y), IVec2::new(10, 10), IVec2::new(vx, vy))
    }

    #[test]
    fn moves_linearly_inside_frame() {
        let mut rect = label(100, 100, 3, -2);
        for n in 1..=20 {
            rect.advance();
            assert_eq!(rect.bounce(FRAME), 0);
            assert_eq!(rect.position, IVec2::new(100 + 3 * n, 100 - 2 * n));
        }
    }

    #[test]
    fn right_edge_flips_once() {
        let mut rect = label(797, 100, 3, 0);
        rect.advance();
        assert_eq!(rect.position.x, 800);
        assert_eq!(rect.bounce(FRAME), 1);
        assert_eq!(rect.velocity.x, -3);

        rect.advance();
        assert_eq!(rect.position.x, 797);
        assert_eq!(rect.bounce(FRAME), 0);
        assert_eq!(rect.velocity.x, -3);
    }

    #[test]
    fn touching_edge_exactly_does_not_bounce() {
        let mut rect = label(787, 0, 3, 0);
        rect.advance();
        assert_eq!(rect.position.x + rect.size.x, 800);
        assert_eq!(rect.bounce(FRAME), 0);
    }

    #[test]
    fn left_and_top_edges_flip_inward() {
        let mut rect = label(1, 2, -3, -3);
        rect.advance();
        assert_eq!(rect.bounce(FRAME), 2);
        assert_eq!(rect.velocity, IVec2::new(3, 3));
    }

    #[test]
    fn zero_velocity_never_bounces() {
        let mut rect = label(-5, 700, 0, 0);
        rect.advance();
        assert_eq!(rect.bounce(FRAME), 0);
    }

    #[test]
    fn stays_within_one_step_of_frame() {
        let mut rect = label(0, 0, 3, 3);
        for _ in 0..5_000 {
            rect.advance();
            rect.bounce(FRAME);
            assert!(rect.position.x >= -3 && rect.position.x + rect.size.x <= 800 + 3);
            assert!(rect.position.y >= -3 && rect.position.y + rect.size.y <= 600 + 3);
        }
    }
}
