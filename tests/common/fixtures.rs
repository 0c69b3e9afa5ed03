//! Test fixtures and constants.

use pixel_stylize::{ColorBuffer, DepthBuffer, Rgba};
use std::path::{Path, PathBuf};

/// Profile names shipped in the embedded config.yaml
pub mod profiles {
    pub const DEFAULT: &str = "default";
    pub const GAMEBOY: &str = "gameboy";
    pub const CRISP: &str = "crisp";
    pub const SOFT: &str = "soft";
}

/// Horizontal gradient with a vertical tint
pub fn gradient(width: usize, height: usize) -> ColorBuffer {
    ColorBuffer::from_fn(width, height, |x, y| {
        Rgba::rgb(
            x as f32 / (width - 1).max(1) as f32,
            y as f32 / (height - 1).max(1) as f32,
            0.4,
        )
    })
    .unwrap()
}

/// Far background with a near square in the middle third
pub fn square_depth(width: usize, height: usize) -> DepthBuffer {
    DepthBuffer::from_fn(width, height, |x, y| {
        let inside = (width / 3..2 * width / 3).contains(&x)
            && (height / 3..2 * height / 3).contains(&y);
        if inside {
            0.2
        } else {
            0.9
        }
    })
    .unwrap()
}

/// Write an 8-bit grayscale PNG from depth samples in [0, 1].
pub fn write_depth_png(path: &Path, depth: &DepthBuffer) {
    let bytes: Vec<u8> = depth
        .pixels()
        .iter()
        .map(|d| (d.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, depth.width() as u32, depth.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&bytes).unwrap();
}

/// Write an RGBA PNG of `color`.
pub fn write_color_png(path: &Path, color: &ColorBuffer) {
    let bytes = pixel_outline::rendering::encode_png(color, false).unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// Write YAML config text into `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}
