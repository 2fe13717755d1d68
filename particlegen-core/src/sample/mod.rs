//! Classify logo pixels and derive per-particle attributes.

use glam::DVec3;
use image::{Rgba, RgbaImage};

use crate::config::GeneratorConfig;

/// Depth assigned to a pure black pixel; brighter pixels sit up to `DEPTH_SPAN` further back.
const DEPTH_BASE: f64 = 0.5;
const DEPTH_SPAN: f64 = 0.2;
/// Scale lost between a black and a white pixel.
const SCALE_FALLOFF: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Normalized position, y flipped so the top image row is 1.0.
    pub position: DVec3,
    pub color: [u8; 3],
    pub scale: f64,
}

impl Particle {
    /// Derive a particle from the pixel at `(x, y)` of a `width` x `height` grid.
    pub fn from_pixel(x: u32, y: u32, width: u32, height: u32, px: Rgba<u8>) -> Self {
        let [r, g, b, _] = px.0;
        let brightness = gray(px) / 255.0;
        Self {
            position: DVec3::new(
                f64::from(x) / f64::from(width),
                1.0 - f64::from(y) / f64::from(height),
                DEPTH_BASE + brightness * DEPTH_SPAN,
            ),
            color: [r, g, b],
            scale: 1.0 - brightness * SCALE_FALLOFF,
        }
    }
}

/// Mean of the color channels, alpha ignored.
pub fn gray(px: Rgba<u8>) -> f64 {
    let [r, g, b, _] = px.0;
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    pub white_threshold: u8,
    pub alpha_threshold: u8,
}

impl Default for Classifier {
    fn default() -> Self {
        Self { white_threshold: 240, alpha_threshold: 128 }
    }
}

impl From<&GeneratorConfig> for Classifier {
    fn from(cfg: &GeneratorConfig) -> Self {
        Self { white_threshold: cfg.white_threshold, alpha_threshold: cfg.alpha_threshold }
    }
}

impl Classifier {
    /// Not near-white and not mostly transparent.
    pub fn is_particle(&self, px: Rgba<u8>) -> bool {
        let [r, g, b, a] = px.0;
        let not_white = [r, g, b].iter().any(|&c| c < self.white_threshold);
        not_white && a > self.alpha_threshold
    }
}

/// Scan `image` in raster order and emit one particle per qualifying pixel.
pub fn sample_particles(image: &RgbaImage, classifier: &Classifier) -> Vec<Particle> {
    let (width, height) = image.dimensions();
    // enumerate_pixels walks rows top to bottom, left to right
    image
        .enumerate_pixels()
        .filter(|(_, _, px)| classifier.is_particle(**px))
        .map(|(x, y, px)| Particle::from_pixel(x, y, width, height, *px))
        .collect()
}
