pub mod schema;

use anyhow::Result;
pub use schema::{FillValues, GeneratorConfig, OutputNames, ResampleFilter};

pub fn load_from_yaml_str(s: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig = serde_yaml::from_str(s)?;
    config.validate()?;
    Ok(config)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<GeneratorConfig> {
    let data = std::fs::read_to_string(path)?;
    load_from_yaml_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = load_from_yaml_str("{}").unwrap();
        assert_eq!(cfg, GeneratorConfig::default());
        assert_eq!(cfg.texture_size, 200);
        assert_eq!(cfg.min_grid_dim, 100);
        assert_eq!(cfg.white_threshold, 240);
        assert_eq!(cfg.alpha_threshold, 128);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = "
source_path: brand/logo.jpeg
texture_size: 64
filter: catmull_rom
fill:
  color: [0, 0, 0]
names:
  scale: scale.png
";
        let cfg = load_from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.source_path, PathBuf::from("brand/logo.jpeg"));
        assert_eq!(cfg.texture_size, 64);
        assert_eq!(cfg.filter, ResampleFilter::CatmullRom);
        assert_eq!(cfg.fill.color, [0, 0, 0]);
        assert_eq!(cfg.fill.position, [128, 128, 128]);
        assert_eq!(cfg.fill.scale, 128);
        assert_eq!(cfg.names.scale, "scale.png");
        assert_eq!(cfg.names.color, "cd-33-logo.png");
    }

    #[test]
    fn zero_texture_size_is_rejected() {
        let err = load_from_yaml_str("texture_size: 0").unwrap_err();
        assert!(err.to_string().contains("texture_size"));
    }

    #[test]
    fn filter_names_parse() {
        assert_eq!("Lanczos3".parse::<ResampleFilter>().unwrap(), ResampleFilter::Lanczos3);
        assert_eq!("catmull-rom".parse::<ResampleFilter>().unwrap(), ResampleFilter::CatmullRom);
        assert!("bicubic".parse::<ResampleFilter>().is_err());
    }
}
