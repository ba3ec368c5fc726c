//! Icon path selection for shortcut requests.

use super::encoder::encode_png;
use super::format::{IconImage, PixelFormat};
use crate::models::{ShortcutRequest, SystemIcon};
use tracing::{debug, warn};

/// Why a supplied icon was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IneligibleReason {
    NoIcon,
    /// The pixel buffer has no host-side copy.
    NotReadable,
    UnsupportedFormat(PixelFormat),
    EncodingFailed(String),
}

impl std::fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IneligibleReason::NoIcon => write!(f, "no icon supplied"),
            IneligibleReason::NotReadable => write!(f, "icon pixels are not readable"),
            IneligibleReason::UnsupportedFormat(format) if format.is_compressed() => {
                write!(f, "icon is compressed ({})", format)
            }
            IneligibleReason::UnsupportedFormat(format) => {
                write!(f, "icon format {} is not supported", format)
            }
            IneligibleReason::EncodingFailed(message) => {
                write!(f, "icon encoding failed: {}", message)
            }
        }
    }
}

/// Outcome of checking one optional icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconEligibility {
    /// PNG bytes ready for the native layer.
    Eligible(Vec<u8>),
    Ineligible(IneligibleReason),
}

/// Icon argument handed to the platform shortcut service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSpec {
    System(SystemIcon),
    Encoded(Vec<u8>),
    Empty,
}

/// Discriminant of an [`IconSpec`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    System,
    Encoded,
    Empty,
}

impl IconSpec {
    pub fn kind(&self) -> IconKind {
        match self {
            IconSpec::System(_) => IconKind::System,
            IconSpec::Encoded(_) => IconKind::Encoded,
            IconSpec::Empty => IconKind::Empty,
        }
    }
}

/// Check readability and format, then encode.
///
/// Readability is checked first: an unreadable buffer cannot be inspected
/// no matter what format it claims.
pub fn check_icon(icon: Option<&IconImage>) -> IconEligibility {
    let Some(icon) = icon else {
        return IconEligibility::Ineligible(IneligibleReason::NoIcon);
    };

    if !icon.readable {
        return IconEligibility::Ineligible(IneligibleReason::NotReadable);
    }
    if !icon.format.is_eligible() {
        return IconEligibility::Ineligible(IneligibleReason::UnsupportedFormat(icon.format));
    }

    match encode_png(icon) {
        Ok(bytes) => IconEligibility::Eligible(bytes),
        Err(e) => IconEligibility::Ineligible(IneligibleReason::EncodingFailed(e.to_string())),
    }
}

/// Pick the icon for a request: system icon, then encoded image, then none.
///
/// Never fails; a dropped icon is logged and the shortcut goes ahead
/// without one.
pub fn resolve_icon(request: &ShortcutRequest) -> IconSpec {
    if let Some(system_icon) = request.system_icon {
        if request.icon.is_some() {
            debug!(
                "Shortcut {} has both icons set; using system icon {}",
                request.id, system_icon
            );
        }
        return IconSpec::System(system_icon);
    }

    match check_icon(request.icon.as_ref()) {
        IconEligibility::Eligible(bytes) => IconSpec::Encoded(bytes),
        IconEligibility::Ineligible(IneligibleReason::NoIcon) => IconSpec::Empty,
        IconEligibility::Ineligible(reason) => {
            warn!(
                "Creating shortcut {} without icon: {}. Check the icon's import settings",
                request.id, reason
            );
            IconSpec::Empty
        }
    }
}
