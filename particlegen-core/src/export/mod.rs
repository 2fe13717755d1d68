//! Export utilities: attribute grids to PNG, plus an optional JSON sidecar.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, RgbImage};
use log::info;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::pack::{Grid, ParticleTextures};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextureMeta {
    pub num_particles: usize,
    pub tex_dim: u32,
    pub texture_size: u32,
    pub color: String,
    pub scale: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPaths {
    pub color: PathBuf,
    pub scale: PathBuf,
    pub position: PathBuf,
    pub metadata: Option<PathBuf>,
}

pub fn rgb_image(grid: &Grid<[u8; 3]>) -> Result<RgbImage, GenerateError> {
    let raw: Vec<u8> = bytemuck::cast_slice(grid.cells()).to_vec();
    let len = raw.len();
    RgbImage::from_raw(grid.dim(), grid.dim(), raw).ok_or(GenerateError::GridShape { dim: grid.dim(), len })
}

pub fn gray_image(grid: &Grid<u8>) -> Result<GrayImage, GenerateError> {
    let raw = grid.cells().to_vec();
    let len = raw.len();
    GrayImage::from_raw(grid.dim(), grid.dim(), raw).ok_or(GenerateError::GridShape { dim: grid.dim(), len })
}

fn encode_err(path: &Path) -> impl FnOnce(image::ImageError) -> GenerateError + '_ {
    move |source| GenerateError::Encode { path: path.to_path_buf(), source }
}

/// Write the color, scale and position textures (and the sidecar when enabled) into `config.output_dir`.
pub fn write_textures(textures: &ParticleTextures, config: &GeneratorConfig) -> Result<ExportedPaths, GenerateError> {
    let dir = &config.output_dir;
    std::fs::create_dir_all(dir).map_err(|source| GenerateError::Io { path: dir.clone(), source })?;

    let names = &config.names;
    let paths = ExportedPaths {
        color: dir.join(&names.color),
        scale: dir.join(&names.scale),
        position: dir.join(&names.position),
        metadata: config.write_metadata.then(|| dir.join(&names.metadata)),
    };

    rgb_image(&textures.color)?
        .save_with_format(&paths.color, ImageFormat::Png)
        .map_err(encode_err(&paths.color))?;
    info!("saved color texture: {}", paths.color.display());
    gray_image(&textures.scale)?
        .save_with_format(&paths.scale, ImageFormat::Png)
        .map_err(encode_err(&paths.scale))?;
    info!("saved scale texture: {}", paths.scale.display());
    rgb_image(&textures.position)?
        .save_with_format(&paths.position, ImageFormat::Png)
        .map_err(encode_err(&paths.position))?;
    info!("saved position texture: {}", paths.position.display());

    if let Some(meta_path) = &paths.metadata {
        let meta = TextureMeta {
            num_particles: textures.num_particles,
            tex_dim: textures.tex_dim,
            texture_size: config.texture_size,
            color: names.color.clone(),
            scale: names.scale.clone(),
            position: names.position.clone(),
        };
        let json = serde_json::to_string_pretty(&meta)?;
        std::fs::write(meta_path, json).map_err(|source| GenerateError::Io { path: meta_path.clone(), source })?;
        info!("saved texture metadata: {}", meta_path.display());
    }

    Ok(paths)
}
