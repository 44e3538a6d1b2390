use wgpu;

use crate::engine::backend::{Dest, Rect};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

// Two triangles per quad, counter-clockwise from the top-left corner.
pub const QUAD_INDICES: &[u16] = &[0, 1, 2, 2, 3, 0];

/// Builds the four corners of `dest` in clip space for a frame of
/// `frame_w` x `frame_h` pixels. Pixel y grows downwards, clip y upwards.
pub fn quad(dest: Dest, frame_w: u32, frame_h: u32) -> [Vertex; 4] {
    let rect = match dest {
        Dest::FullFrame => Rect::new(0, 0, frame_w as i32, frame_h as i32),
        Dest::Rect(rect) => rect,
    };
    let to_clip_x = |x: i32| x as f32 / frame_w as f32 * 2.0 - 1.0;
    let to_clip_y = |y: i32| 1.0 - y as f32 / frame_h as f32 * 2.0;

    let left = to_clip_x(rect.x);
    let right = to_clip_x(rect.x + rect.w);
    let top = to_clip_y(rect.y);
    let bottom = to_clip_y(rect.y + rect.h);

    [
        Vertex {
            position: [left, top],
            tex_coords: [0.0, 0.0],
        },
        Vertex {
            position: [left, bottom],
            tex_coords: [0.0, 1.0],
        },
        Vertex {
            position: [right, bottom],
            tex_coords: [1.0, 1.0],
        },
        Vertex {
            position: [right, top],
            tex_coords: [1.0, 0.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frame_covers_clip_space() {
        let corners = quad(Dest::FullFrame, 800, 600);
        assert_eq!(corners[0].position, [-1.0, 1.0]);
        assert_eq!(corners[2].position, [1.0, -1.0]);
    }

    #[test]
    fn rect_maps_pixels_to_clip_space() {
        let corners = quad(Dest::Rect(Rect::new(200, 150, 400, 300)), 800, 600);
        assert_eq!(corners[0].position, [-0.5, 0.5]);
        assert_eq!(corners[1].position, [-0.5, -0.5]);
        assert_eq!(corners[2].position, [0.5, -0.5]);
        assert_eq!(corners[3].position, [0.5, 0.5]);
    }

    #[test]
    fn texture_corners_follow_positions() {
        let corners = quad(Dest::Rect(Rect::new(0, 0, 10, 10)), 100, 100);
        assert_eq!(corners[0].tex_coords, [0.0, 0.0]);
        assert_eq!(corners[2].tex_coords, [1.0, 1.0]);
    }
}
