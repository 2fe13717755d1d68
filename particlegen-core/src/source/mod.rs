//! Decode the logo and bring it to the sampling resolution.

use std::path::Path;

use image::{imageops, ImageBuffer, Rgba, RgbaImage};
use log::{debug, info};

use crate::config::ResampleFilter;
use crate::error::GenerateError;

pub fn load_source(path: &Path, texture_size: u32, filter: ResampleFilter) -> Result<RgbaImage, GenerateError> {
    if !path.exists() {
        return Err(GenerateError::MissingInput(path.to_path_buf()));
    }
    info!("decoding {}", path.display());
    let decoded = image::open(path)
        .map_err(|source| GenerateError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();
    debug!("decoded {}x{} logo", decoded.width(), decoded.height());
    Ok(resample(decoded, texture_size, filter))
}

/// Resize to `size` x `size`. Images already at that size pass through untouched.
///
/// Filtering runs on premultiplied alpha so the color of transparent pixels
/// does not bleed into the logo's edges.
pub fn resample(image: RgbaImage, size: u32, filter: ResampleFilter) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image;
    }
    debug!("resampling {}x{} -> {}x{} ({:?})", image.width(), image.height(), size, size, filter);

    let premultiplied: ImageBuffer<Rgba<f32>, Vec<f32>> = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = imageops::resize(&premultiplied, size, size, filter.into());

    RgbaImage::from_fn(size, size, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        // fully transparent cells keep whatever color the filter produced
        let straight = |c: f32| if a > 0.0 { c / a } else { c };
        Rgba([to_channel(straight(r)), to_channel(straight(g)), to_channel(straight(b)), to_channel(a)])
    })
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
