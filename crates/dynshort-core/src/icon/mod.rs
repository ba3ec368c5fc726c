//! Icon eligibility checks and encoding.
//!
//! The native shortcut service takes one of three icon arguments: a symbolic
//! system icon name, a PNG byte buffer, or nothing. A custom image only makes
//! it across when its pixels are host-readable and stored in an uncompressed
//! format; anything else downgrades to "no icon" without failing the create.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynshort::icon::{check_icon, IconEligibility, IconImage, PixelFormat};
//!
//! let icon = IconImage::new(64, 64, PixelFormat::RGBA32, pixels);
//! if let IconEligibility::Eligible(png) = check_icon(Some(&icon)) {
//!     println!("{} PNG bytes", png.len());
//! }
//! ```

mod eligibility;
mod encoder;
mod format;

pub use eligibility::{
    check_icon, resolve_icon, IconEligibility, IconKind, IconSpec, IneligibleReason,
};
pub use encoder::{decode_png, encode_png};
pub use format::{IconImage, PixelFormat};
