use std::path::PathBuf;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    /// Side length the logo is resampled to before sampling.
    pub texture_size: u32,
    /// Lower bound on the side length of the packed attribute grids.
    pub min_grid_dim: u32,
    /// A pixel counts as background when all of r, g, b are at or above this.
    pub white_threshold: u8,
    /// A pixel needs alpha strictly above this to become a particle.
    pub alpha_threshold: u8,
    pub filter: ResampleFilter,
    pub fill: FillValues,
    pub names: OutputNames,
    pub write_metadata: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("logo.png"),
            output_dir: PathBuf::from("assets").join("images"),
            texture_size: 200,
            min_grid_dim: 100,
            white_threshold: 240,
            alpha_threshold: 128,
            filter: ResampleFilter::default(),
            fill: FillValues::default(),
            names: OutputNames::default(),
            write_metadata: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.texture_size == 0 {
            return Err(GenerateError::Config("texture_size must be greater than zero".into()));
        }
        if self.min_grid_dim == 0 {
            return Err(GenerateError::Config("min_grid_dim must be greater than zero".into()));
        }
        Ok(())
    }
}

/// Values written into grid cells past the last particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillValues {
    pub position: [u8; 3],
    pub color: [u8; 3],
    pub scale: u8,
}

impl Default for FillValues {
    fn default() -> Self {
        Self { position: [128, 128, 128], color: [146, 106, 255], scale: 128 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub color: String,
    pub scale: String,
    pub position: String,
    pub metadata: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            color: "cd-33-logo.png".into(),
            scale: "sc-33-logo.png".into(),
            position: "pos-33-logo.png".into(),
            metadata: "particles-33-logo.json".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(f: ResampleFilter) -> Self {
        match f {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "nearest" => Ok(Self::Nearest),
            "triangle" => Ok(Self::Triangle),
            "catmull_rom" => Ok(Self::CatmullRom),
            "gaussian" => Ok(Self::Gaussian),
            "lanczos3" => Ok(Self::Lanczos3),
            other => Err(GenerateError::Config(format!("unknown resample filter '{}'", other))),
        }
    }
}
