//! Pending-launch sources.
//!
//! The platform marks a launch or resume that came from a shortcut tap by
//! leaving the shortcut's ID on the launch intent. Whatever holds that
//! marker, the tracker only ever sees it through
//! [`LaunchIntentSource::take_shortcut_id`], which reads and clears in one
//! step.

use crate::config::IntentConfig;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Producer side of the one-shot launch marker.
pub trait LaunchIntentSource: Send + Sync {
    /// Return the pending shortcut ID, if any, and clear it.
    ///
    /// Must be atomic with respect to other callers: two concurrent takes
    /// never both observe the same ID.
    fn take_shortcut_id(&self) -> Option<String>;
}

/// In-process single-slot launch marker.
///
/// The host writes it from its intent callback with [`LaunchSignal::set`];
/// a later write before the next check replaces the earlier one.
#[derive(Debug, Default)]
pub struct LaunchSignal {
    pending: Mutex<Option<String>>,
}

impl LaunchSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal that already carries `id`, as on a shortcut cold start.
    pub fn with_pending(id: impl Into<String>) -> Self {
        Self {
            pending: Mutex::new(Some(id.into())),
        }
    }

    /// Record the shortcut that launched or resumed the app.
    pub fn set(&self, id: impl Into<String>) {
        let id = id.into();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(id) {
            debug!("Launch signal {} replaced before it was observed", previous);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl LaunchIntentSource for LaunchSignal {
    fn take_shortcut_id(&self) -> Option<String> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

/// The shape of a platform intent object's string extras.
pub trait IntentExtras: Send + Sync {
    fn has_extra(&self, key: &str) -> bool;
    fn get_string_extra(&self, key: &str) -> Option<String>;
    fn remove_extra(&self, key: &str);
}

/// Launch source backed by an intent extra.
///
/// The has/get/remove sequence runs under a mutex so it behaves as a single
/// take.
pub struct IntentExtraSource {
    intent: Arc<dyn IntentExtras>,
    key: String,
    guard: Mutex<()>,
}

impl IntentExtraSource {
    /// Read the default `shortcut_ID` extra.
    pub fn new(intent: Arc<dyn IntentExtras>) -> Self {
        Self::with_key(intent, IntentConfig::SHORTCUT_ID_EXTRA)
    }

    pub fn with_key(intent: Arc<dyn IntentExtras>, key: impl Into<String>) -> Self {
        Self {
            intent,
            key: key.into(),
            guard: Mutex::new(()),
        }
    }
}

impl LaunchIntentSource for IntentExtraSource {
    fn take_shortcut_id(&self) -> Option<String> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        if !self.intent.has_extra(&self.key) {
            return None;
        }
        let id = self.intent.get_string_extra(&self.key);
        self.intent.remove_extra(&self.key);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeIntent {
        extras: Mutex<HashMap<String, String>>,
    }

    impl FakeIntent {
        fn put(&self, key: &str, value: &str) {
            self.extras
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    impl IntentExtras for FakeIntent {
        fn has_extra(&self, key: &str) -> bool {
            self.extras.lock().unwrap().contains_key(key)
        }

        fn get_string_extra(&self, key: &str) -> Option<String> {
            self.extras.lock().unwrap().get(key).cloned()
        }

        fn remove_extra(&self, key: &str) {
            self.extras.lock().unwrap().remove(key);
        }
    }

    #[test]
    fn test_signal_take_clears() {
        let signal = LaunchSignal::with_pending("a.b.x");
        assert!(signal.is_pending());
        assert_eq!(signal.take_shortcut_id().as_deref(), Some("a.b.x"));
        assert!(!signal.is_pending());
        assert_eq!(signal.take_shortcut_id(), None);
    }

    #[test]
    fn test_signal_last_write_wins() {
        let signal = LaunchSignal::new();
        signal.set("a.b.x");
        signal.set("a.b.y");
        assert_eq!(signal.take_shortcut_id().as_deref(), Some("a.b.y"));
    }

    #[test]
    fn test_intent_source_removes_extra() {
        let intent = Arc::new(FakeIntent::default());
        intent.put(IntentConfig::SHORTCUT_ID_EXTRA, "a.b.love");
        intent.put("other", "kept");

        let source = IntentExtraSource::new(intent.clone());
        assert_eq!(source.take_shortcut_id().as_deref(), Some("a.b.love"));
        assert_eq!(source.take_shortcut_id(), None);
        assert!(intent.has_extra("other"));
    }

    #[test]
    fn test_intent_source_custom_key() {
        let intent = Arc::new(FakeIntent::default());
        intent.put("launch_id", "a.b.x");
        let source = IntentExtraSource::with_key(intent, "launch_id");
        assert_eq!(source.take_shortcut_id().as_deref(), Some("a.b.x"));
    }

    #[test]
    fn test_concurrent_takes_deliver_once() {
        let signal = Arc::new(LaunchSignal::with_pending("a.b.x"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let signal = signal.clone();
                std::thread::spawn(move || signal.take_shortcut_id())
            })
            .collect();

        let delivered = handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .count();
        assert_eq!(delivered, 1);
    }
}
