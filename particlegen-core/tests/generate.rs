use image::{Rgba, RgbaImage};
use particlegen_core::config::GeneratorConfig;
use particlegen_core::pack::PackedCell;
use particlegen_core::sample::{Classifier, Particle};
use particlegen_core::{generate, textures_from_image, GenerateError};
use pretty_assertions::assert_eq;

/// White square with a dark diagonal band and a few translucent pixels.
fn logo(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let d = x.abs_diff(y);
        if d < 3 {
            Rgba([(x * 7 % 200) as u8, (y * 3 % 220) as u8, 40, 255])
        } else if d == 3 {
            Rgba([0, 0, 0, 100])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

fn config_in(dir: &std::path::Path, size: u32) -> GeneratorConfig {
    GeneratorConfig {
        source_path: dir.join("logo.png"),
        output_dir: dir.join("out"),
        texture_size: size,
        ..Default::default()
    }
}

#[test]
fn packed_cells_match_source_pixels_in_raster_order() {
    let img = logo(200);
    let config = GeneratorConfig::default();
    let textures = textures_from_image(&img, &config);

    let classifier = Classifier::default();
    let expected: Vec<PackedCell> = img
        .enumerate_pixels()
        .filter(|(_, _, px)| classifier.is_particle(**px))
        .map(|(x, y, px)| PackedCell::from(&Particle::from_pixel(x, y, 200, 200, *px)))
        .collect();

    assert!(!expected.is_empty());
    assert_eq!(textures.num_particles, expected.len());
    let dim = textures.tex_dim as usize;
    assert!(dim >= 100 && dim * dim >= textures.num_particles);
    for (i, cell) in expected.iter().enumerate() {
        assert_eq!(textures.cell(i).as_ref(), Some(cell), "cell {}", i);
    }
    for i in expected.len()..dim * dim {
        assert_eq!(
            textures.cell(i),
            Some(PackedCell { position: [128, 128, 128], color: [146, 106, 255], scale: 128 })
        );
    }
}

#[test]
fn transform_is_deterministic() {
    let img = logo(64);
    let config = GeneratorConfig { texture_size: 64, ..Default::default() };
    assert_eq!(textures_from_image(&img, &config), textures_from_image(&img, &config));
}

#[test]
fn large_particle_count_grows_the_grid() {
    let img = RgbaImage::from_pixel(150, 150, Rgba([0, 0, 0, 255]));
    let textures = textures_from_image(&img, &GeneratorConfig::default());
    assert_eq!(textures.num_particles, 22_500);
    assert_eq!(textures.tex_dim, 150);
    assert!(textures.cell(22_499).is_some());
}

#[test]
fn end_to_end_writes_textures() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), 48);
    logo(48).save(&config.source_path).unwrap();

    let report = generate(&config).unwrap();
    assert_eq!(report.tex_dim, 100);

    let color = image::open(&report.paths.color).unwrap();
    assert_eq!((color.width(), color.height()), (100, 100));
    assert_eq!(color.color(), image::ColorType::Rgb8);

    let scale = image::open(&report.paths.scale).unwrap();
    assert_eq!(scale.color(), image::ColorType::L8);

    let position = image::open(&report.paths.position).unwrap().to_rgb8();
    assert_eq!(position.dimensions(), (100, 100));
    assert_eq!(position.get_pixel(99, 99).0, [128, 128, 128]);

    // same-size source is not resampled, so the first particle is the (0, 0) pixel
    let first = PackedCell::from(&Particle::from_pixel(0, 0, 48, 48, *logo(48).get_pixel(0, 0)));
    assert_eq!(position.get_pixel(0, 0).0, first.position);
    assert_eq!(color.to_rgb8().get_pixel(0, 0).0, first.color);
    assert_eq!(scale.to_luma8().get_pixel(0, 0).0, [first.scale]);
    assert_eq!(report.paths.metadata, None);
}

#[test]
fn rerun_produces_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), 32);
    logo(32).save(&config.source_path).unwrap();

    let first = generate(&config).unwrap();
    let bytes = std::fs::read(&first.paths.position).unwrap();
    let second = generate(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(bytes, std::fs::read(&second.paths.position).unwrap());
}

#[test]
fn resamples_to_texture_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), 20);
    RgbaImage::from_pixel(64, 40, Rgba([10, 10, 10, 255])).save(&config.source_path).unwrap();

    let report = generate(&config).unwrap();
    assert_eq!(report.num_particles, 400);
    assert_eq!(report.tex_dim, 100);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), 200);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::MissingInput(ref p) if *p == config.source_path));
    assert!(!config.output_dir.exists());
}

#[test]
fn invalid_config_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig { texture_size: 0, ..config_in(dir.path(), 1) };
    assert!(matches!(generate(&config), Err(GenerateError::Config(_))));
}
