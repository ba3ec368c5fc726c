//! Pixel formats and raw icon images.

use serde::{Deserialize, Serialize};

/// Storage format of an icon's pixel buffer.
///
/// Only the uncompressed formats listed in [`PixelFormat::is_eligible`] can be
/// encoded for the native layer. Block-compressed formats and packed
/// sub-byte formats are recognised so they can be rejected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PixelFormat {
    Alpha8,
    R8,
    R16,
    RFloat,
    RG16,
    RGFloat,
    RGB24,
    RGBA32,
    RGBAFloat,
    RGB48,
    RGBA64,
    // Uncompressed but not shippable
    RGB565,
    ARGB4444,
    BGRA32,
    // Block compressed
    DXT1,
    DXT5,
    BC7,
    ETC2RGB,
    ETC2RGBA8,
    ASTC4x4,
    ASTC8x8,
}

impl PixelFormat {
    /// Bytes per pixel for uncompressed formats, `None` for block formats.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Alpha8 | PixelFormat::R8 => Some(1),
            PixelFormat::R16
            | PixelFormat::RG16
            | PixelFormat::RGB565
            | PixelFormat::ARGB4444 => Some(2),
            PixelFormat::RGB24 => Some(3),
            PixelFormat::RFloat | PixelFormat::RGBA32 | PixelFormat::BGRA32 => Some(4),
            PixelFormat::RGB48 => Some(6),
            PixelFormat::RGFloat | PixelFormat::RGBA64 => Some(8),
            PixelFormat::RGBAFloat => Some(16),
            PixelFormat::DXT1
            | PixelFormat::DXT5
            | PixelFormat::BC7
            | PixelFormat::ETC2RGB
            | PixelFormat::ETC2RGBA8
            | PixelFormat::ASTC4x4
            | PixelFormat::ASTC8x8 => None,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.bytes_per_pixel().is_none()
    }

    /// Whether the native shortcut service accepts icons of this format.
    pub fn is_eligible(&self) -> bool {
        matches!(
            self,
            PixelFormat::Alpha8
                | PixelFormat::R8
                | PixelFormat::R16
                | PixelFormat::RFloat
                | PixelFormat::RG16
                | PixelFormat::RGFloat
                | PixelFormat::RGB24
                | PixelFormat::RGBA32
                | PixelFormat::RGBAFloat
                | PixelFormat::RGB48
                | PixelFormat::RGBA64
        )
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A raw icon image.
///
/// Rows are stored top-down; multi-byte samples are little-endian.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Whether the pixel buffer is visible to the host (CPU-side copy kept).
    pub readable: bool,
    pub data: Vec<u8>,
}

impl IconImage {
    /// Create a readable image.
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            readable: true,
            data,
        }
    }

    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Buffer length the format and dimensions require.
    ///
    /// `None` for block-compressed formats and for dimensions whose byte
    /// size does not fit in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        let bpp = self.format.bytes_per_pixel()?;
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(bpp)
    }
}
