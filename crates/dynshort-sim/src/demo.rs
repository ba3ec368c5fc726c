//! The demo shortcut set registered by the harness.

use dynshort::{IconImage, PixelFormat, PlatformConfig, ShortcutRequest, SystemIcon};

pub const LOVE_ID: &str = "com.example.gamename.love";
pub const DAILY_GIFT_ID: &str = "com.example.gamename.daily_gift";
pub const SUPPORT_ID: &str = "com.example.gamename.support";

/// Three shortcuts, one per icon path: system icon, custom image and a
/// system icon with an empty short label.
pub fn demo_requests() -> Vec<ShortcutRequest> {
    vec![
        ShortcutRequest::new(LOVE_ID, "", "Send some love").with_system_icon(SystemIcon::Love),
        ShortcutRequest::new(DAILY_GIFT_ID, "Gift", "Claim your daily gift")
            .with_icon(gift_icon(PlatformConfig::RECOMMENDED_ICON_SIZE)),
        ShortcutRequest::new(SUPPORT_ID, "Support", "Contact support")
            .with_system_icon(SystemIcon::Mail),
    ]
}

/// A square RGBA icon: a gold box with a red ribbon cross.
pub fn gift_icon(size: u32) -> IconImage {
    let band = (size / 8).max(1);
    let center = size / 2;
    let mut data = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let ribbon = x.abs_diff(center) < band || y.abs_diff(center) < band;
            let pixel = if ribbon {
                [200, 30, 40, 255]
            } else {
                [240, 190, 60, 255]
            };
            data.extend_from_slice(&pixel);
        }
    }

    IconImage::new(size, size, PixelFormat::RGBA32, data)
}
