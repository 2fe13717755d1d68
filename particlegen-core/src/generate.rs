use image::RgbaImage;
use log::info;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::export::{self, ExportedPaths};
use crate::pack::{self, ParticleTextures};
use crate::sample::{self, Classifier};
use crate::source;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub num_particles: usize,
    pub tex_dim: u32,
    pub paths: ExportedPaths,
}

/// Sample an already-resampled logo and pack the result. No I/O.
pub fn textures_from_image(image: &RgbaImage, config: &GeneratorConfig) -> ParticleTextures {
    let particles = sample::sample_particles(image, &Classifier::from(config));
    info!("generated {} particles from logo", particles.len());
    let textures = pack::pack(&particles, config.min_grid_dim, &config.fill);
    info!("output texture size: {}x{}", textures.tex_dim, textures.tex_dim);
    textures
}

/// Load the configured logo, build the three textures and write them out.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    config.validate()?;
    let image = source::load_source(&config.source_path, config.texture_size, config.filter)?;
    let textures = textures_from_image(&image, config);
    let paths = export::write_textures(&textures, config)?;
    Ok(GenerationReport { num_particles: textures.num_particles, tex_dim: textures.tex_dim, paths })
}
