pub mod mixer;

pub use mixer::Mixer;
