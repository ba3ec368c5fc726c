//! Shortcut creation requests and the predefined system icon set.

use crate::icon::IconImage;
use serde::{Deserialize, Serialize};

/// Predefined icons the native layer ships with.
///
/// These are 40x40 glyphs that closely resemble the iOS system icons. The
/// symbolic name handed to the platform is the upper-case variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SystemIcon {
    Compose,
    Play,
    Pause,
    Add,
    Location,
    Search,
    Share,
    Prohibit,
    Contact,
    Home,
    MarkLocation,
    Favorite,
    Love,
    Cloud,
    Invitation,
    Confirmation,
    Mail,
    Message,
    Date,
    Time,
    CapturePhoto,
    CaptureVideo,
    Task,
    TaskCompleted,
    Alarm,
    Bookmark,
    Shuffle,
    Audio,
    Update,
}

impl SystemIcon {
    pub const ALL: [SystemIcon; 29] = [
        SystemIcon::Compose,
        SystemIcon::Play,
        SystemIcon::Pause,
        SystemIcon::Add,
        SystemIcon::Location,
        SystemIcon::Search,
        SystemIcon::Share,
        SystemIcon::Prohibit,
        SystemIcon::Contact,
        SystemIcon::Home,
        SystemIcon::MarkLocation,
        SystemIcon::Favorite,
        SystemIcon::Love,
        SystemIcon::Cloud,
        SystemIcon::Invitation,
        SystemIcon::Confirmation,
        SystemIcon::Mail,
        SystemIcon::Message,
        SystemIcon::Date,
        SystemIcon::Time,
        SystemIcon::CapturePhoto,
        SystemIcon::CaptureVideo,
        SystemIcon::Task,
        SystemIcon::TaskCompleted,
        SystemIcon::Alarm,
        SystemIcon::Bookmark,
        SystemIcon::Shuffle,
        SystemIcon::Audio,
        SystemIcon::Update,
    ];

    /// Symbolic name understood by the native shortcut service.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemIcon::Compose => "COMPOSE",
            SystemIcon::Play => "PLAY",
            SystemIcon::Pause => "PAUSE",
            SystemIcon::Add => "ADD",
            SystemIcon::Location => "LOCATION",
            SystemIcon::Search => "SEARCH",
            SystemIcon::Share => "SHARE",
            SystemIcon::Prohibit => "PROHIBIT",
            SystemIcon::Contact => "CONTACT",
            SystemIcon::Home => "HOME",
            SystemIcon::MarkLocation => "MARK_LOCATION",
            SystemIcon::Favorite => "FAVORITE",
            SystemIcon::Love => "LOVE",
            SystemIcon::Cloud => "CLOUD",
            SystemIcon::Invitation => "INVITATION",
            SystemIcon::Confirmation => "CONFIRMATION",
            SystemIcon::Mail => "MAIL",
            SystemIcon::Message => "MESSAGE",
            SystemIcon::Date => "DATE",
            SystemIcon::Time => "TIME",
            SystemIcon::CapturePhoto => "CAPTURE_PHOTO",
            SystemIcon::CaptureVideo => "CAPTURE_VIDEO",
            SystemIcon::Task => "TASK",
            SystemIcon::TaskCompleted => "TASK_COMPLETED",
            SystemIcon::Alarm => "ALARM",
            SystemIcon::Bookmark => "BOOKMARK",
            SystemIcon::Shuffle => "SHUFFLE",
            SystemIcon::Audio => "AUDIO",
            SystemIcon::Update => "UPDATE",
        }
    }

    /// Parse a symbolic name, ignoring case. `"NONE"` is not an icon.
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|icon| icon.as_str() == wanted)
    }
}

impl std::fmt::Display for SystemIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything needed to create one dynamic shortcut.
///
/// When both `system_icon` and `icon` are set the system icon wins and the
/// image is never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutRequest {
    /// Platform-wide identity of the shortcut; delivered back on trigger.
    pub id: String,
    /// Label used when the shortcut is pinned as its own launcher icon.
    pub short_label: String,
    /// Label shown in the long-press menu.
    pub long_label: String,
    /// Custom icon; must be readable and uncompressed to be shipped.
    pub icon: Option<IconImage>,
    pub system_icon: Option<SystemIcon>,
}

impl ShortcutRequest {
    pub fn new(
        id: impl Into<String>,
        short_label: impl Into<String>,
        long_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            short_label: short_label.into(),
            long_label: long_label.into(),
            icon: None,
            system_icon: None,
        }
    }

    pub fn with_icon(mut self, icon: IconImage) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_system_icon(mut self, icon: SystemIcon) -> Self {
        self.system_icon = Some(icon);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_icon_roundtrip() {
        for icon in SystemIcon::ALL {
            assert_eq!(SystemIcon::from_str(icon.as_str()), Some(icon));
        }
    }

    #[test]
    fn test_system_icon_parse_is_lenient() {
        assert_eq!(SystemIcon::from_str("love"), Some(SystemIcon::Love));
        assert_eq!(
            SystemIcon::from_str("task-completed"),
            Some(SystemIcon::TaskCompleted)
        );
        assert_eq!(SystemIcon::from_str("NONE"), None);
        assert_eq!(SystemIcon::from_str(""), None);
    }

    #[test]
    fn test_system_icon_serde_name_matches_symbol() {
        let json = serde_json::to_string(&SystemIcon::MarkLocation).unwrap();
        assert_eq!(json, "\"MARK_LOCATION\"");
    }

    #[test]
    fn test_request_builder() {
        let request = ShortcutRequest::new("a.b.love", "", "Reason to love")
            .with_system_icon(SystemIcon::Love);
        assert_eq!(request.id, "a.b.love");
        assert!(request.short_label.is_empty());
        assert_eq!(request.system_icon, Some(SystemIcon::Love));
        assert!(request.icon.is_none());
    }
}
