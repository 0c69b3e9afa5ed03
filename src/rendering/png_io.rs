use crate::error::RenderError;
use pixel_stylize::{ColorBuffer, DepthBuffer, ImageBuffer, Rgba};
use std::io::Cursor;
use std::path::Path;

/// Decoded 8- or 16-bit samples with their channel layout
struct RawImage {
    width: usize,
    height: usize,
    channels: usize,
    sixteen_bit: bool,
    data: Vec<u8>,
}

impl RawImage {
    /// Sample `channel` of pixel `index`, normalized to [0, 1].
    fn sample(&self, index: usize, channel: usize) -> f32 {
        let i = index * self.channels + channel;
        if self.sixteen_bit {
            let v = u16::from_be_bytes([self.data[i * 2], self.data[i * 2 + 1]]);
            v as f32 / u16::MAX as f32
        } else {
            self.data[i] as f32 / u8::MAX as f32
        }
    }

    fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

fn decode_raw(bytes: &[u8]) -> Result<RawImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palette and low-bit grayscale come out as 8-bit; tRNS becomes alpha
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data)?;
    data.truncate(info.buffer_size());

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(RenderError::UnsupportedFormat(
                "indexed color was not expanded".to_string(),
            ))
        }
    };
    let sixteen_bit = match info.bit_depth {
        png::BitDepth::Eight => false,
        png::BitDepth::Sixteen => true,
        other => {
            return Err(RenderError::UnsupportedFormat(format!(
                "{other:?} bit depth after expansion"
            )))
        }
    };

    Ok(RawImage {
        width: info.width as usize,
        height: info.height as usize,
        channels,
        sixteen_bit,
        data,
    })
}

/// Decode a PNG into an RGBA color buffer.
///
/// Grayscale is replicated into RGB; images without alpha are opaque.
pub fn decode_color_png(bytes: &[u8]) -> Result<ColorBuffer, RenderError> {
    let raw = decode_raw(bytes)?;
    let pixels = (0..raw.pixel_count())
        .map(|i| match raw.channels {
            1 => {
                let v = raw.sample(i, 0);
                Rgba::rgb(v, v, v)
            }
            2 => {
                let v = raw.sample(i, 0);
                Rgba::new(v, v, v, raw.sample(i, 1))
            }
            3 => Rgba::rgb(raw.sample(i, 0), raw.sample(i, 1), raw.sample(i, 2)),
            _ => Rgba::new(
                raw.sample(i, 0),
                raw.sample(i, 1),
                raw.sample(i, 2),
                raw.sample(i, 3),
            ),
        })
        .collect();

    tracing::debug!(width = raw.width, height = raw.height, "Decoded color PNG");
    Ok(ImageBuffer::from_pixels(pixels, raw.width, raw.height)?)
}

/// Decode a PNG into a depth buffer.
///
/// Depth is read from the first channel (gray or red) in [0, 1]; 16-bit
/// images keep their full precision.
pub fn decode_depth_png(bytes: &[u8]) -> Result<DepthBuffer, RenderError> {
    let raw = decode_raw(bytes)?;
    let depth = (0..raw.pixel_count()).map(|i| raw.sample(i, 0)).collect();

    tracing::debug!(
        width = raw.width,
        height = raw.height,
        sixteen_bit = raw.sixteen_bit,
        "Decoded depth PNG"
    );
    Ok(ImageBuffer::from_pixels(depth, raw.width, raw.height)?)
}

/// Read and decode a color PNG from disk.
pub fn load_color_png(path: &Path) -> Result<ColorBuffer, RenderError> {
    let bytes = std::fs::read(path)?;
    decode_color_png(&bytes)
}

/// Read and decode a depth PNG from disk.
pub fn load_depth_png(path: &Path) -> Result<DepthBuffer, RenderError> {
    let bytes = std::fs::read(path)?;
    decode_depth_png(&bytes)
}

/// Encode `buffer` and write it to `path`, returning the encoded size.
pub fn save_png(path: &Path, buffer: &ColorBuffer, optimize: bool) -> Result<usize, RenderError> {
    let bytes = encode_png(buffer, optimize)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "Wrote PNG");
    Ok(bytes.len())
}

/// Depth buffer with every sample at the far plane.
pub fn flat_depth(width: usize, height: usize) -> Result<DepthBuffer, RenderError> {
    Ok(ImageBuffer::new(width, height, 1.0)?)
}

/// Encode a color buffer as 8-bit RGBA PNG.
///
/// With `optimize`, the result is re-compressed with oxipng; if that fails
/// the plain encoding is returned.
pub fn encode_png(buffer: &ColorBuffer, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let too_large = |_| RenderError::UnsupportedFormat("image exceeds PNG limits".to_string());
    let width = u32::try_from(buffer.width()).map_err(too_large)?;
    let height = u32::try_from(buffer.height()).map_err(too_large)?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        if optimize {
            // oxipng picks filters and compression afterwards
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_rgba8())?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    let plain_len = png_bytes.len();
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::warn!(%e, "PNG optimization failed, keeping plain encoding");
        png_bytes
    });
    tracing::debug!(plain_len, optimized_len = optimized.len(), "Optimized PNG");
    Ok(optimized)
}
