pub mod renderer;
pub mod text;
pub mod texture;
pub mod vertex;

pub use renderer::Renderer;
pub use texture::Texture;
pub use vertex::Vertex;
