//! Trigger observers.
//!
//! Observers are called synchronously, in registration order, on the thread
//! that reported the foreground transition. A panicking observer is logged
//! and skipped; the others still receive the trigger.

use crate::models::{ShortcutTrigger, TriggerKind};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::error;

/// Receives shortcut triggers.
pub trait ShortcutObserver: Send + Sync {
    fn on_shortcut_triggered(&self, id: &str, kind: TriggerKind);
}

impl<F> ShortcutObserver for F
where
    F: Fn(&str, TriggerKind) + Send + Sync,
{
    fn on_shortcut_triggered(&self, id: &str, kind: TriggerKind) {
        self(id, kind)
    }
}

/// Handle returned by [`ObserverRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ObserverId {
    fn from(value: u64) -> Self {
        ObserverId(value)
    }
}

/// Ordered list of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: RwLock<Vec<(ObserverId, Arc<dyn ShortcutObserver>)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn ShortcutObserver>) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        observers.push((id, observer));
        id
    }

    /// Returns false when the handle was not registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a trigger to every observer. Returns how many returned
    /// normally.
    ///
    /// The list is snapshotted first, so observers may subscribe or
    /// unsubscribe from inside the callback.
    pub fn notify(&self, trigger: &ShortcutTrigger) -> usize {
        let snapshot: Vec<(ObserverId, Arc<dyn ShortcutObserver>)> = self
            .observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        let mut delivered = 0;
        for (id, observer) in snapshot {
            let result = catch_unwind(AssertUnwindSafe(|| {
                observer.on_shortcut_triggered(&trigger.id, trigger.kind)
            }));
            match result {
                Ok(()) => delivered += 1,
                Err(payload) => {
                    error!(
                        "Shortcut observer {} panicked on {}: {}",
                        id.value(),
                        trigger.id,
                        panic_message(payload.as_ref())
                    );
                }
            }
        }
        delivered
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
