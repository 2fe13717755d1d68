use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("logo file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: image::ImageError },
    #[error("failed to encode {}: {source}", path.display())]
    Encode { path: PathBuf, source: image::ImageError },
    #[error("i/o error on {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("grid of dimension {dim} does not match buffer of {len} bytes")]
    GridShape { dim: u32, len: usize },
    #[error("failed to serialize texture metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
