//! Builder for composing a [`ShortcutManager`].

use super::manager::ShortcutManager;
use crate::config::SimulationConfig;
use crate::error::{Result, ShortcutError};
use crate::launch::{LaunchIntentSource, LaunchSignal, LaunchTracker};
use crate::platform::{
    DisabledBackend, NativeBackend, PlatformShortcutService, ShortcutBackend, SimulatedBackend,
};
use std::sync::Arc;
use tracing::{debug, warn};

enum BackendChoice {
    Native {
        service: Arc<dyn PlatformShortcutService>,
        main_activity: String,
    },
    Simulated,
    Disabled,
}

/// Builder for configuring a [`ShortcutManager`].
///
/// # Example
///
/// ```rust,ignore
/// use dynshort::ShortcutManager;
///
/// let manager = ShortcutManager::builder()
///     .native(service, "com.example.game.MainActivity")
///     .launch_source(intent_source)
///     .build()?;
/// ```
pub struct ShortcutManagerBuilder {
    backend: BackendChoice,
    launch_source: Option<Arc<dyn LaunchIntentSource>>,
    simulation: SimulationConfig,
}

impl ShortcutManagerBuilder {
    /// Create a builder for the disabled backend.
    pub fn new() -> Self {
        Self {
            backend: BackendChoice::Disabled,
            launch_source: None,
            simulation: SimulationConfig::default(),
        }
    }

    /// Forward to the host's shortcut service.
    ///
    /// `main_activity` is the activity every shortcut launches. A launch
    /// source is required as well.
    pub fn native(
        mut self,
        service: Arc<dyn PlatformShortcutService>,
        main_activity: impl Into<String>,
    ) -> Self {
        self.backend = BackendChoice::Native {
            service,
            main_activity: main_activity.into(),
        };
        self
    }

    /// Editor/test harness backend. Never reaches a platform.
    pub fn simulated(mut self) -> Self {
        self.backend = BackendChoice::Simulated;
        self
    }

    /// No-op backend for unsupported platforms.
    pub fn disabled(mut self) -> Self {
        self.backend = BackendChoice::Disabled;
        self
    }

    /// Pick native when the build target has a shortcut service, disabled
    /// otherwise.
    pub fn platform_default(
        self,
        service: Arc<dyn PlatformShortcutService>,
        main_activity: impl Into<String>,
    ) -> Self {
        if crate::platform::platform_has_shortcut_service() {
            self.native(service, main_activity)
        } else {
            self.disabled()
        }
    }

    /// Where pending launch markers come from.
    ///
    /// Default: an empty [`LaunchSignal`].
    pub fn launch_source(mut self, source: Arc<dyn LaunchIntentSource>) -> Self {
        self.launch_source = Some(source);
        self
    }

    /// Simulation settings. Only the simulated backend acts on them.
    pub fn simulation_config(mut self, config: SimulationConfig) -> Self {
        self.simulation = config;
        self
    }

    /// Build the manager.
    pub fn build(self) -> Result<ShortcutManager> {
        let (backend, source): (Arc<dyn ShortcutBackend>, Arc<dyn LaunchIntentSource>) =
            match self.backend {
                BackendChoice::Native {
                    service,
                    main_activity,
                } => {
                    if main_activity.trim().is_empty() {
                        return Err(ShortcutError::Config {
                            message: "native backend requires a main activity".to_string(),
                        });
                    }
                    let source = self.launch_source.ok_or_else(|| ShortcutError::Config {
                        message: "native backend requires a launch source".to_string(),
                    })?;
                    (Arc::new(NativeBackend::new(service, main_activity)), source)
                }
                BackendChoice::Simulated => {
                    let source = Self::simulated_source(&self.simulation, self.launch_source);
                    (Arc::new(SimulatedBackend::new()), source)
                }
                BackendChoice::Disabled => {
                    let source = self
                        .launch_source
                        .unwrap_or_else(|| Arc::new(LaunchSignal::new()));
                    (Arc::new(DisabledBackend::new()), source)
                }
            };

        debug!("Building shortcut manager with {} backend", backend.kind());
        Ok(ShortcutManager::from_parts(
            backend,
            LaunchTracker::new(source),
            self.simulation,
        ))
    }

    /// A simulated cold start is a launch signal that is already pending
    /// when the tracker first looks.
    fn simulated_source(
        simulation: &SimulationConfig,
        explicit: Option<Arc<dyn LaunchIntentSource>>,
    ) -> Arc<dyn LaunchIntentSource> {
        if simulation.simulate_cold_start {
            match simulation.target() {
                Some(id) => {
                    if explicit.is_some() {
                        debug!("Simulated cold start replaces the configured launch source");
                    }
                    return Arc::new(LaunchSignal::with_pending(id));
                }
                None => warn!("Missing simulation target; cold start will not be simulated"),
            }
        }
        explicit.unwrap_or_else(|| Arc::new(LaunchSignal::new()))
    }
}

impl Default for ShortcutManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
