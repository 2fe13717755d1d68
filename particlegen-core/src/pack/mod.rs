//! Pack a raster-ordered particle list into square attribute grids.

pub mod grid;

pub use grid::Grid;
use log::debug;

use crate::config::FillValues;
use crate::sample::Particle;

/// The three attribute grids plus the numbers a consumer needs to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticleTextures {
    pub num_particles: usize,
    pub tex_dim: u32,
    pub position: Grid<[u8; 3]>,
    pub color: Grid<[u8; 3]>,
    pub scale: Grid<u8>,
}

/// One grid cell read back across all three grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedCell {
    pub position: [u8; 3],
    pub color: [u8; 3],
    pub scale: u8,
}

impl From<&Particle> for PackedCell {
    fn from(p: &Particle) -> Self {
        Self {
            position: [quantize(p.position.x), quantize(p.position.y), quantize(p.position.z)],
            color: p.color,
            scale: quantize(p.scale),
        }
    }
}

impl ParticleTextures {
    /// Read linear cell `i` (row `i / tex_dim`, column `i % tex_dim`).
    pub fn cell(&self, i: usize) -> Option<PackedCell> {
        Some(PackedCell {
            position: self.position.at(i)?,
            color: self.color.at(i)?,
            scale: self.scale.at(i)?,
        })
    }
}

/// Map a normalized value onto `0..=255`, truncating.
pub fn quantize(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

/// Smallest square side that holds `n` cells, never below `min_dim`.
pub fn grid_dim(n: usize, min_dim: u32) -> u32 {
    let mut dim = (n as f64).sqrt().ceil() as u64;
    // float sqrt may be off by one for very large n
    while dim * dim < n as u64 {
        dim += 1;
    }
    while dim > 0 && (dim - 1) * (dim - 1) >= n as u64 {
        dim -= 1;
    }
    (dim as u32).max(min_dim)
}

pub fn pack(particles: &[Particle], min_dim: u32, fill: &FillValues) -> ParticleTextures {
    let num_particles = particles.len();
    let tex_dim = grid_dim(num_particles, min_dim);
    debug!("packing {} particles into {}x{} grids", num_particles, tex_dim, tex_dim);

    let mut position = Grid::filled(tex_dim, fill.position);
    let mut color = Grid::filled(tex_dim, fill.color);
    let mut scale = Grid::filled(tex_dim, fill.scale);

    let dim = tex_dim as usize;
    for (i, particle) in particles.iter().enumerate() {
        let (row, col) = (i / dim, i % dim);
        assert!(row < dim, "particle {} lands on row {} of a {}x{} grid", i, row, dim, dim);
        let cell = PackedCell::from(particle);
        let at = (row as u32, col as u32);
        position[at] = cell.position;
        color[at] = cell.color;
        scale[at] = cell.scale;
    }

    ParticleTextures { num_particles, tex_dim, position, color, scale }
}
