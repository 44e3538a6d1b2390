//! Engine module containing the platform seams and their window, graphics,
//! input and audio implementations.

pub mod audio;
pub mod backend;
pub mod graphics;
pub mod input;
pub mod window;

// Re-export commonly used types
pub use audio::Mixer;
pub use backend::{
    AudioBackend, ClipId, Dest, ImageId, InputSource, Rect, RenderBackend, Rgba, Silence, TrackId,
};
pub use graphics::{renderer::Renderer, texture::Texture, vertex::Vertex};
pub use window::WindowManager;
