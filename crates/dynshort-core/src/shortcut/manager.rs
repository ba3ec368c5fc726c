//! High-level shortcut management.

use super::builder::ShortcutManagerBuilder;
use crate::config::{BackendKind, SimulationConfig};
use crate::error::{Result, ShortcutError};
use crate::icon::{resolve_icon, IconKind};
use crate::launch::LaunchTracker;
use crate::models::{ShortcutRequest, ShortcutTrigger, TriggerKind};
use crate::observer::{ObserverId, ObserverRegistry, ShortcutObserver};
use crate::platform::{Dispatch, ShortcutBackend};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of [`ShortcutManager::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// One create call reached the platform.
    Created { icon: IconKind },
    /// A shortcut with this ID exists; nothing was sent.
    AlreadyExists,
    /// The backend has no platform to talk to.
    Unsupported,
}

/// Facade over the shortcut backend, launch tracker and observers.
///
/// One instance is expected per process. It is created by
/// [`ShortcutManager::builder`] at startup and handed to whatever drives the
/// host lifecycle.
pub struct ShortcutManager {
    backend: Arc<dyn ShortcutBackend>,
    tracker: LaunchTracker,
    observers: ObserverRegistry,
    simulation: SimulationConfig,
}

impl ShortcutManager {
    /// Start composing a manager. Defaults to the disabled backend.
    pub fn builder() -> ShortcutManagerBuilder {
        ShortcutManagerBuilder::new()
    }

    pub(super) fn from_parts(
        backend: Arc<dyn ShortcutBackend>,
        tracker: LaunchTracker,
        simulation: SimulationConfig,
    ) -> Self {
        Self {
            backend,
            tracker,
            observers: ObserverRegistry::new(),
            simulation,
        }
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    // ========================================
    // Shortcut operations
    // ========================================

    /// Create a dynamic shortcut.
    ///
    /// An existing ID is left untouched and reported as
    /// [`CreateOutcome::AlreadyExists`]. Icon problems never fail the call;
    /// the shortcut is created without an icon instead.
    pub fn create(&self, request: &ShortcutRequest) -> Result<CreateOutcome> {
        if request.id.trim().is_empty() {
            return Err(ShortcutError::Validation {
                field: "id".to_string(),
                message: "shortcut ID must not be empty".to_string(),
            });
        }

        // Only a real platform can hold a duplicate.
        if self.backend.kind() == BackendKind::Native && self.backend.has_shortcut(&request.id)? {
            warn!(
                "Shortcut {} already exists; leaving it unchanged",
                request.id
            );
            return Ok(CreateOutcome::AlreadyExists);
        }

        let icon = resolve_icon(request);
        let icon_kind = icon.kind();

        match self.backend.create_shortcut(request, &icon)? {
            Dispatch::Sent => {
                info!("Created shortcut {} ({:?} icon)", request.id, icon_kind);
                Ok(CreateOutcome::Created { icon: icon_kind })
            }
            Dispatch::Skipped => Ok(CreateOutcome::Unsupported),
        }
    }

    /// Remove a dynamic shortcut. Unknown IDs are ignored by the platform.
    pub fn remove(&self, id: &str) -> Result<()> {
        if let Dispatch::Sent = self.backend.remove_shortcut(id)? {
            info!("Removed shortcut {}", id);
        }
        Ok(())
    }

    pub fn exists(&self, id: &str) -> Result<bool> {
        self.backend.has_shortcut(id)
    }

    pub fn count(&self) -> Result<u32> {
        self.backend.shortcut_count()
    }

    /// Registered shortcut IDs, in the platform's order.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        self.backend.shortcut_ids()
    }

    /// Creates the simulated backend recorded instead of sending, as
    /// `(id, icon kind)`. Empty on other backends.
    pub fn simulated_requests(&self) -> Vec<(String, IconKind)> {
        self.backend.recorded_requests()
    }

    // ========================================
    // Observers
    // ========================================

    pub fn subscribe(&self, observer: Arc<dyn ShortcutObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========================================
    // Lifecycle
    // ========================================

    /// Whether [`ShortcutManager::on_cold_start`] has yet to run.
    pub fn is_first_launch(&self) -> bool {
        self.tracker.is_first_launch()
    }

    /// Call once at startup, after the host finished initializing.
    pub fn on_cold_start(&self) -> Option<ShortcutTrigger> {
        let trigger = self.tracker.on_cold_start()?;
        self.deliver(&trigger);
        Some(trigger)
    }

    /// Call on every background -> foreground transition.
    pub fn on_foreground_resumed(&self) -> Option<ShortcutTrigger> {
        let trigger = self.tracker.on_foreground_resumed()?;
        self.deliver(&trigger);
        Some(trigger)
    }

    /// Host pause callback; `paused == false` is a resume.
    pub fn on_pause_changed(&self, paused: bool) -> Option<ShortcutTrigger> {
        if paused {
            return None;
        }
        self.on_foreground_resumed()
    }

    // ========================================
    // Simulation
    // ========================================

    /// The simulation settings the manager was built with.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Deliver a made-up trigger straight to observers.
    ///
    /// Only the simulated backend accepts this. The launch tracker and the
    /// platform are bypassed.
    pub fn simulate(&self, id: &str, kind: TriggerKind) -> Option<ShortcutTrigger> {
        if self.backend.kind() != BackendKind::Simulated {
            warn!(
                "Trigger simulation is only available on the simulated backend (current: {})",
                self.backend.kind()
            );
            return None;
        }
        if !SimulationConfig::is_target(id) {
            warn!("Missing simulation target; nothing to simulate");
            return None;
        }
        if !self.simulation.is_listed(id) {
            warn!("{} is not a simulation shortcut ID; nothing to simulate", id);
            return None;
        }
        if kind == TriggerKind::None {
            warn!("Refusing to simulate a trigger of kind none for {}", id);
            return None;
        }

        let trigger = ShortcutTrigger::new(id, kind);
        self.deliver(&trigger);
        Some(trigger)
    }

    fn deliver(&self, trigger: &ShortcutTrigger) {
        let delivered = self.observers.notify(trigger);
        debug!(
            "Delivered {} trigger for {} to {} observer(s)",
            trigger.kind, trigger.id, delivered
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{IconImage, PixelFormat};
    use crate::launch::LaunchSignal;
    use crate::models::SystemIcon;
    use crate::icon::IconSpec;
    use crate::platform::{InMemoryShortcutService, PlatformShortcutService};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Disabled-kind backend that counts existence checks.
    #[derive(Default)]
    struct CountingBackend {
        lookups: AtomicUsize,
    }

    impl ShortcutBackend for CountingBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::Disabled
        }

        fn create_shortcut(&self, _request: &ShortcutRequest, _icon: &IconSpec) -> Result<Dispatch> {
            Ok(Dispatch::Skipped)
        }

        fn remove_shortcut(&self, _id: &str) -> Result<Dispatch> {
            Ok(Dispatch::Skipped)
        }

        fn has_shortcut(&self, _id: &str) -> Result<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }

        fn shortcut_count(&self) -> Result<u32> {
            Ok(0)
        }

        fn shortcut_ids(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn native_manager() -> (ShortcutManager, Arc<InMemoryShortcutService>, Arc<LaunchSignal>) {
        let service = Arc::new(InMemoryShortcutService::new());
        let signal = Arc::new(LaunchSignal::new());
        let manager = ShortcutManager::builder()
            .native(service.clone(), "com.example.MainActivity")
            .launch_source(signal.clone())
            .build()
            .unwrap();
        (manager, service, signal)
    }

    fn collect_triggers(manager: &ShortcutManager) -> Arc<Mutex<Vec<ShortcutTrigger>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        manager.subscribe(Arc::new(move |id: &str, kind: TriggerKind| {
            sink.lock().unwrap().push(ShortcutTrigger::new(id, kind));
        }));
        seen
    }

    #[test]
    fn test_create_with_encoded_icon() {
        let (manager, service, _) = native_manager();
        let icon = IconImage::new(2, 2, PixelFormat::RGBA32, vec![9; 16]);
        let request = ShortcutRequest::new("a.b.gift", "Gift", "Get your gift!").with_icon(icon);

        let outcome = manager.create(&request).unwrap();
        assert_eq!(
            outcome,
            CreateOutcome::Created {
                icon: IconKind::Encoded
            }
        );
        assert_eq!(service.get("a.b.gift").unwrap().icon.kind(), IconKind::Encoded);
    }

    #[test]
    fn test_create_rejects_empty_id() {
        let (manager, service, _) = native_manager();
        let result = manager.create(&ShortcutRequest::new("", "x", "x"));
        assert!(matches!(result, Err(ShortcutError::Validation { .. })));
        assert_eq!(service.dynamic_shortcut_count().unwrap(), 0);
    }

    #[test]
    fn test_unreadable_icon_still_creates() {
        let (manager, service, _) = native_manager();
        let icon = IconImage::new(2, 2, PixelFormat::RGBA32, vec![0; 16]).with_readable(false);
        let request = ShortcutRequest::new("a.b.x", "x", "x").with_icon(icon);

        assert_eq!(
            manager.create(&request).unwrap(),
            CreateOutcome::Created {
                icon: IconKind::Empty
            }
        );
        assert!(service.has_dynamic_shortcut_id("a.b.x").unwrap());
    }

    #[test]
    fn test_pause_does_not_check_signal() {
        let (manager, _, signal) = native_manager();
        manager.on_cold_start();
        signal.set("a.b.x");

        assert_eq!(manager.on_pause_changed(true), None);
        assert!(signal.is_pending());

        let trigger = manager.on_pause_changed(false).unwrap();
        assert_eq!(trigger.kind, TriggerKind::ResumedFromBackground);
    }

    #[test]
    fn test_triggers_reach_observers() {
        let (manager, _, signal) = native_manager();
        let seen = collect_triggers(&manager);

        signal.set("a.b.unknown");
        manager.on_cold_start();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ShortcutTrigger::new("a.b.unknown", TriggerKind::ColdStart)]
        );
    }

    #[test]
    fn test_simulate_rejected_on_native() {
        let (manager, _, _) = native_manager();
        let seen = collect_triggers(&manager);
        assert_eq!(manager.simulate("a.b.x", TriggerKind::ColdStart), None);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simulated_backend_queries_are_empty() {
        let manager = ShortcutManager::builder().simulated().build().unwrap();
        let request =
            ShortcutRequest::new("a.b.love", "", "Love").with_system_icon(SystemIcon::Love);

        assert_eq!(manager.create(&request).unwrap(), CreateOutcome::Unsupported);
        assert_eq!(manager.count().unwrap(), 0);
        assert!(manager.list_ids().unwrap().is_empty());
        assert!(!manager.exists("a.b.love").unwrap());
        manager.remove("a.b.love").unwrap();
    }

    #[test]
    fn test_simulate_delivers_directly() {
        let manager = ShortcutManager::builder().simulated().build().unwrap();
        let seen = collect_triggers(&manager);

        let trigger = manager
            .simulate("com.example.gamename.love", TriggerKind::ResumedFromBackground)
            .unwrap();
        assert_eq!(trigger.id, "com.example.gamename.love");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_simulate_missing_target() {
        let manager = ShortcutManager::builder().simulated().build().unwrap();
        let seen = collect_triggers(&manager);

        assert_eq!(manager.simulate("none", TriggerKind::ColdStart), None);
        assert_eq!(manager.simulate("", TriggerKind::ColdStart), None);
        assert_eq!(
            manager.simulate("com.example.gamename.love", TriggerKind::None),
            None
        );
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simulate_rejects_unlisted_id() {
        let manager = ShortcutManager::builder().simulated().build().unwrap();
        let seen = collect_triggers(&manager);

        assert_eq!(
            manager.simulate("com.example.gamename.unknown", TriggerKind::ColdStart),
            None
        );
        assert!(seen.lock().unwrap().is_empty());

        let open = SimulationConfig {
            simulation_shortcut_ids: Vec::new(),
            ..SimulationConfig::default()
        };
        let manager = ShortcutManager::builder()
            .simulated()
            .simulation_config(open)
            .build()
            .unwrap();
        assert!(manager
            .simulate("com.example.gamename.unknown", TriggerKind::ColdStart)
            .is_some());
    }

    #[test]
    fn test_simulated_requests_are_recorded() {
        let manager = ShortcutManager::builder().simulated().build().unwrap();
        let request = ShortcutRequest::new("a.b.love", "", "Love").with_system_icon(SystemIcon::Love);
        assert_eq!(manager.create(&request).unwrap(), CreateOutcome::Unsupported);

        assert_eq!(
            manager.simulated_requests(),
            vec![("a.b.love".to_string(), IconKind::System)]
        );
        assert_eq!(manager.count().unwrap(), 0);

        let (native, _, _) = native_manager();
        native.create(&request).unwrap();
        assert!(native.simulated_requests().is_empty());
    }

    #[test]
    fn test_non_native_create_skips_existence_check() {
        let backend = Arc::new(CountingBackend::default());
        let manager = ShortcutManager::from_parts(
            backend.clone(),
            LaunchTracker::new(Arc::new(LaunchSignal::new())),
            SimulationConfig::default(),
        );

        let request = ShortcutRequest::new("a.b.x", "x", "x");
        assert_eq!(manager.create(&request).unwrap(), CreateOutcome::Unsupported);
        assert_eq!(backend.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disabled_backend() {
        let manager = ShortcutManager::builder().build().unwrap();
        assert_eq!(manager.backend_kind(), BackendKind::Disabled);
        assert_eq!(
            manager
                .create(&ShortcutRequest::new("a.b.x", "x", "x"))
                .unwrap(),
            CreateOutcome::Unsupported
        );
        assert_eq!(manager.count().unwrap(), 0);
        assert_eq!(manager.on_cold_start(), None);
    }
}
