//! Assertion helpers for tests.

use pixel_stylize::{ColorBuffer, Rgba};
use pretty_assertions::assert_eq;

/// Assert every channel of every pixel lies in [0, 1]
pub fn assert_in_range(buffer: &ColorBuffer) {
    for (i, p) in buffer.pixels().iter().enumerate() {
        for v in [p.r, p.g, p.b, p.a] {
            assert!(
                (0.0..=1.0).contains(&v),
                "pixel {i} has channel {v} outside [0, 1]: {p:?}"
            );
        }
    }
}

/// Assert every `block x block` tile holds a single color
pub fn assert_uniform_blocks(buffer: &ColorBuffer, block: usize) {
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let anchor = buffer.get(x / block * block, y / block * block);
            assert_eq!(
                buffer.get(x, y),
                anchor,
                "pixel ({x}, {y}) differs from its {block}x{block} block"
            );
        }
    }
}

/// Assert RGB channels sit on the `levels`-step grid
pub fn assert_quantized(buffer: &ColorBuffer, levels: u32) {
    let steps = (levels - 1) as f32;
    for p in buffer.pixels() {
        for v in [p.r, p.g, p.b] {
            let scaled = v * steps;
            assert!(
                (scaled - scaled.round()).abs() < 1e-4,
                "channel {v} is not a multiple of 1/{steps}"
            );
        }
    }
}

/// Assert the buffer is a valid PNG signature-wise
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Count pixels equal to `color`
pub fn count_color(buffer: &ColorBuffer, color: Rgba) -> usize {
    buffer.count_where(|p| *p == color)
}
