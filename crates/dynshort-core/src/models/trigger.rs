//! Shortcut trigger events.

use serde::{Deserialize, Serialize};

/// Why a shortcut-originated launch event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum TriggerKind {
    #[default]
    None,
    /// The process was started by the shortcut tap.
    ColdStart,
    /// A backgrounded process was brought forward by the shortcut tap.
    ResumedFromBackground,
}

impl TriggerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerKind::None => "none",
            TriggerKind::ColdStart => "cold_start",
            TriggerKind::ResumedFromBackground => "resumed_from_background",
        }
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shortcut tap observed on a foreground transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutTrigger {
    pub id: String,
    pub kind: TriggerKind,
}

impl ShortcutTrigger {
    pub fn new(id: impl Into<String>, kind: TriggerKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_none() {
        assert_eq!(TriggerKind::default(), TriggerKind::None);
    }

    #[test]
    fn test_trigger_serializes_snake_case() {
        let trigger = ShortcutTrigger::new("a.b.x", TriggerKind::ResumedFromBackground);
        let json = serde_json::to_value(&trigger).unwrap();
        assert_eq!(json["id"], "a.b.x");
        assert_eq!(json["kind"], "resumed_from_background");
    }
}
