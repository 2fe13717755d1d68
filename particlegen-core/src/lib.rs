pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod pack;
pub mod sample;
pub mod source;

pub use error::GenerateError;
pub use generate::{generate, textures_from_image, GenerationReport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
