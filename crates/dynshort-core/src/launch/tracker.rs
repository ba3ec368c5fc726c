//! Cold-start and resume detection.

use super::signal::LaunchIntentSource;
use crate::models::{ShortcutTrigger, TriggerKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns the pending launch marker into at most one trigger per foreground
/// transition.
///
/// The very first transition belongs to [`LaunchTracker::on_cold_start`];
/// resumes observed before it ran are ignored so the cold start does not
/// fire twice.
pub struct LaunchTracker {
    source: Arc<dyn LaunchIntentSource>,
    first_launch: AtomicBool,
}

impl LaunchTracker {
    pub fn new(source: Arc<dyn LaunchIntentSource>) -> Self {
        Self {
            source,
            first_launch: AtomicBool::new(true),
        }
    }

    /// Whether the cold-start check has yet to run.
    pub fn is_first_launch(&self) -> bool {
        self.first_launch.load(Ordering::SeqCst)
    }

    /// Check the launch marker once, after startup initialization.
    pub fn on_cold_start(&self) -> Option<ShortcutTrigger> {
        if !self.is_first_launch() {
            warn!("Cold start was already handled; ignoring repeated call");
            return None;
        }

        let trigger = self.observe(TriggerKind::ColdStart);
        self.first_launch.store(false, Ordering::SeqCst);
        trigger
    }

    /// Check the launch marker after a background -> foreground transition.
    pub fn on_foreground_resumed(&self) -> Option<ShortcutTrigger> {
        if self.is_first_launch() {
            debug!("Resume before cold start was handled; leaving launch signal in place");
            return None;
        }
        self.observe(TriggerKind::ResumedFromBackground)
    }

    fn observe(&self, kind: TriggerKind) -> Option<ShortcutTrigger> {
        match self.source.take_shortcut_id() {
            Some(id) if id.is_empty() => {
                debug!("Ignoring empty shortcut ID on {}", kind);
                None
            }
            Some(id) => {
                info!("Shortcut {} triggered ({})", id, kind);
                Some(ShortcutTrigger::new(id, kind))
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::LaunchSignal;

    fn tracker_with(signal: &Arc<LaunchSignal>) -> LaunchTracker {
        LaunchTracker::new(signal.clone())
    }

    #[test]
    fn test_cold_start_emits_once() {
        let signal = Arc::new(LaunchSignal::with_pending("a.b.x"));
        let tracker = tracker_with(&signal);

        assert_eq!(
            tracker.on_cold_start(),
            Some(ShortcutTrigger::new("a.b.x", TriggerKind::ColdStart))
        );
        assert_eq!(tracker.on_foreground_resumed(), None);
        assert!(!tracker.is_first_launch());
    }

    #[test]
    fn test_cold_start_without_signal() {
        let signal = Arc::new(LaunchSignal::new());
        let tracker = tracker_with(&signal);
        assert_eq!(tracker.on_cold_start(), None);
        assert!(!tracker.is_first_launch());
    }

    #[test]
    fn test_resume_before_cold_start_is_noop() {
        let signal = Arc::new(LaunchSignal::with_pending("a.b.x"));
        let tracker = tracker_with(&signal);

        assert_eq!(tracker.on_foreground_resumed(), None);
        assert!(signal.is_pending());

        let trigger = tracker.on_cold_start().unwrap();
        assert_eq!(trigger.kind, TriggerKind::ColdStart);
    }

    #[test]
    fn test_resume_emits_background_kind() {
        let signal = Arc::new(LaunchSignal::new());
        let tracker = tracker_with(&signal);
        tracker.on_cold_start();

        signal.set("a.b.y");
        assert_eq!(
            tracker.on_foreground_resumed(),
            Some(ShortcutTrigger::new("a.b.y", TriggerKind::ResumedFromBackground))
        );
        assert_eq!(tracker.on_foreground_resumed(), None);
    }

    #[test]
    fn test_empty_id_is_consumed_silently() {
        let signal = Arc::new(LaunchSignal::with_pending(""));
        let tracker = tracker_with(&signal);
        assert_eq!(tracker.on_cold_start(), None);
        assert!(!signal.is_pending());
    }

    #[test]
    fn test_second_cold_start_is_ignored() {
        let signal = Arc::new(LaunchSignal::new());
        let tracker = tracker_with(&signal);
        tracker.on_cold_start();

        signal.set("a.b.x");
        assert_eq!(tracker.on_cold_start(), None);
        // The marker stays for the next resume.
        assert!(signal.is_pending());
    }
}
