use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Pixels at or below this alpha are treated as transparent
pub const ALPHA_THRESHOLD: u8 = 50;
/// Channels above this value count towards "near white"
pub const WHITE_THRESHOLD: u8 = 250;

pub const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Summary of a written silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilhouetteStats {
    pub width: u32,
    pub height: u32,
    pub foreground_pixels: usize,
}

/// A pixel is icon ink when it is sufficiently opaque and not near-white
pub fn is_foreground(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    let near_white = r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD;
    a > ALPHA_THRESHOLD && !near_white
}

/// Classify every pixel into an opaque black/white mask of the same size
pub fn build_silhouette(source: &RgbaImage) -> RgbaImage {
    let (width, height) = source.dimensions();

    ImageBuffer::from_fn(width, height, |x, y| {
        if is_foreground(source.get_pixel(x, y)) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

pub fn foreground_count(silhouette: &RgbaImage) -> usize {
    silhouette.pixels().filter(|p| **p == FOREGROUND).count()
}

/// Load `source`, classify it and save the mask as PNG at `destination`
pub fn write_silhouette(source: &Path, destination: &Path) -> Result<SilhouetteStats> {
    let img = image::open(source)
        .with_context(|| format!("Failed to load source image {}", source.display()))?
        .to_rgba8();

    let silhouette = build_silhouette(&img);
    silhouette
        .save_with_format(destination, image::ImageFormat::Png)
        .with_context(|| format!("Failed to save silhouette {}", destination.display()))?;

    let (width, height) = silhouette.dimensions();
    Ok(SilhouetteStats {
        width,
        height,
        foreground_pixels: foreground_count(&silhouette),
    })
}
