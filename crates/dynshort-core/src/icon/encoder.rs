//! PNG interchange encoding for shortcut icons.
//!
//! Integer formats are encoded losslessly at their native depth. Float
//! formats are clamped to `[0, 1]` and stored as 16-bit samples; PNG has no
//! float sample type.
//!
//! | Source     | PNG colour type       |
//! |------------|-----------------------|
//! | Alpha8     | grey+alpha 8 (grey 255) |
//! | R8         | grey 8                |
//! | R16        | grey 16               |
//! | RFloat     | grey 16               |
//! | RG16       | RGB 8 (blue 0)        |
//! | RGFloat    | RGB 16 (blue 0)       |
//! | RGB24      | RGB 8                 |
//! | RGBA32     | RGBA 8                |
//! | RGB48      | RGB 16                |
//! | RGBA64     | RGBA 16               |
//! | RGBAFloat  | RGBA 16               |

use super::format::{IconImage, PixelFormat};
use crate::error::{Result, ShortcutError};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
use std::io::Cursor;
use tracing::debug;

/// Encode an icon into a PNG byte stream.
pub fn encode_png(icon: &IconImage) -> Result<Vec<u8>> {
    let image = to_dynamic_image(icon)?;

    let mut png_data = Vec::new();
    image.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;

    debug!(
        "Encoded {}x{} {} icon into {} PNG bytes",
        icon.width,
        icon.height,
        icon.format,
        png_data.len()
    );
    Ok(png_data)
}

/// Decode a PNG byte stream produced by [`encode_png`].
pub fn decode_png(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory_with_format(bytes, ImageFormat::Png)?)
}

fn to_dynamic_image(icon: &IconImage) -> Result<DynamicImage> {
    if icon.format.bytes_per_pixel().is_none() {
        return Err(encoding_error(format!(
            "{} is a block-compressed format",
            icon.format
        )));
    }
    let expected = icon.expected_len().ok_or_else(|| {
        encoding_error(format!(
            "{}x{} {} icon is too large",
            icon.width, icon.height, icon.format
        ))
    })?;
    if icon.data.len() != expected {
        return Err(encoding_error(format!(
            "pixel buffer holds {} bytes, {}x{} {} needs {}",
            icon.data.len(),
            icon.width,
            icon.height,
            icon.format,
            expected
        )));
    }

    let (w, h) = (icon.width, icon.height);
    let data = &icon.data;

    let image = match icon.format {
        PixelFormat::Alpha8 => {
            let raw: Vec<u8> = data.iter().flat_map(|&a| [u8::MAX, a]).collect();
            ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8)
        }
        PixelFormat::R8 => ImageBuffer::<Luma<u8>, _>::from_raw(w, h, data.clone())
            .map(DynamicImage::ImageLuma8),
        PixelFormat::R16 => ImageBuffer::<Luma<u16>, _>::from_raw(w, h, le_u16(data))
            .map(DynamicImage::ImageLuma16),
        PixelFormat::RFloat => {
            let raw: Vec<u16> = le_f32(data).map(quantize).collect();
            ImageBuffer::<Luma<u16>, _>::from_raw(w, h, raw).map(DynamicImage::ImageLuma16)
        }
        PixelFormat::RG16 => {
            let raw: Vec<u8> = data
                .chunks_exact(2)
                .flat_map(|rg| [rg[0], rg[1], 0])
                .collect();
            ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, raw).map(DynamicImage::ImageRgb8)
        }
        PixelFormat::RGFloat => {
            let samples: Vec<u16> = le_f32(data).map(quantize).collect();
            let raw: Vec<u16> = samples
                .chunks_exact(2)
                .flat_map(|rg| [rg[0], rg[1], 0])
                .collect();
            ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, raw).map(DynamicImage::ImageRgb16)
        }
        PixelFormat::RGB24 => ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, data.clone())
            .map(DynamicImage::ImageRgb8),
        PixelFormat::RGBA32 => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, data.clone())
            .map(DynamicImage::ImageRgba8),
        PixelFormat::RGB48 => ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, le_u16(data))
            .map(DynamicImage::ImageRgb16),
        PixelFormat::RGBA64 => ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, le_u16(data))
            .map(DynamicImage::ImageRgba16),
        PixelFormat::RGBAFloat => {
            let raw: Vec<u16> = le_f32(data).map(quantize).collect();
            ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, raw).map(DynamicImage::ImageRgba16)
        }
        other => {
            return Err(encoding_error(format!(
                "{} cannot be shipped to the shortcut service",
                other
            )))
        }
    };

    image.ok_or_else(|| encoding_error(format!("{}x{} buffer does not fit", w, h)))
}

fn le_u16(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect()
}

fn le_f32(data: &[u8]) -> impl Iterator<Item = f32> + '_ {
    data.chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
}

fn quantize(sample: f32) -> u16 {
    (sample.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
}

fn encoding_error(message: String) -> ShortcutError {
    ShortcutError::IconEncoding {
        message,
        source: None,
    }
}
