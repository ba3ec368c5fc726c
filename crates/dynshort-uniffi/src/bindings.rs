// Enums shared with dynshort; they derive uniffi::Enum there.
pub use dynshort::{PixelFormat, SystemIcon, TriggerKind};

use dynshort::launch::IntentExtraSource;
use dynshort::{
    CreateOutcome, IconImage, IconKind, IconSpec, IntentExtras, ObserverId,
    PlatformShortcutService, ShortcutError, ShortcutManager, ShortcutObserver, ShortcutRequest,
    ShortcutTrigger, SimulationConfig,
};
use std::sync::Arc;

// =============================================================================
// FfiError - Simplified error type for the FFI boundary
// =============================================================================

/// FFI-friendly error type.
///
/// Flattened version of `ShortcutError`. Source errors (`std::io::Error`,
/// `image::ImageError`, ...) are converted to their string form.
#[derive(Debug, Clone, uniffi::Error, thiserror::Error)]
pub enum FfiError {
    #[error("Native error: {message}")]
    Native { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Icon error: {message}")]
    Icon { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    /// A host callback failed in a way the host did not declare.
    #[error("Callback error: {message}")]
    Callback { message: String },

    #[error("{0}")]
    Other(String),
}

impl From<ShortcutError> for FfiError {
    fn from(err: ShortcutError) -> Self {
        match err {
            ShortcutError::Native { operation, message } => FfiError::Native {
                message: format!("{}: {}", operation, message),
            },
            ShortcutError::Validation { field, message } => FfiError::Validation {
                message: format!("{}: {}", field, message),
            },
            ShortcutError::IconEncoding { message, .. } => FfiError::Icon { message },
            ShortcutError::Config { message } => FfiError::Config { message },
            ShortcutError::Json { message, .. } => FfiError::Config {
                message: format!("JSON error: {}", message),
            },
            ShortcutError::Io { message, path, .. } => FfiError::Io {
                message: match path {
                    Some(p) => format!("{}: {}", p.display(), message),
                    None => message,
                },
            },
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FfiError {
    fn from(err: uniffi::UnexpectedUniFFICallbackError) -> Self {
        FfiError::Callback {
            message: err.reason,
        }
    }
}

/// Result type for FFI operations.
pub type FfiResult<T> = Result<T, FfiError>;

/// Get the version of the dynshort-uniffi bindings.
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// =============================================================================
// FFI Wrapper Types
// =============================================================================

/// A raw icon image. Multi-byte samples are little-endian.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIconImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub readable: bool,
    pub data: Vec<u8>,
}

impl From<FfiIconImage> for IconImage {
    fn from(icon: FfiIconImage) -> Self {
        IconImage::new(icon.width, icon.height, icon.format, icon.data)
            .with_readable(icon.readable)
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShortcutRequest {
    pub id: String,
    pub short_label: String,
    pub long_label: String,
    pub icon: Option<FfiIconImage>,
    pub system_icon: Option<SystemIcon>,
}

impl From<FfiShortcutRequest> for ShortcutRequest {
    fn from(r: FfiShortcutRequest) -> Self {
        ShortcutRequest {
            id: r.id,
            short_label: r.short_label,
            long_label: r.long_label,
            icon: r.icon.map(IconImage::from),
            system_icon: r.system_icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiShortcutTrigger {
    pub id: String,
    pub kind: TriggerKind,
}

impl From<ShortcutTrigger> for FfiShortcutTrigger {
    fn from(t: ShortcutTrigger) -> Self {
        Self {
            id: t.id,
            kind: t.kind,
        }
    }
}

/// Simulation settings for `FfiShortcutManager::simulated`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSimulationConfig {
    pub simulate_cold_start: bool,
    pub simulation_shortcut_id: String,
    pub simulation_shortcut_ids: Vec<String>,
}

impl From<FfiSimulationConfig> for SimulationConfig {
    fn from(c: FfiSimulationConfig) -> Self {
        SimulationConfig {
            simulate_cold_start: c.simulate_cold_start,
            simulation_shortcut_id: c.simulation_shortcut_id,
            simulation_shortcut_ids: c.simulation_shortcut_ids,
        }
    }
}

impl From<SimulationConfig> for FfiSimulationConfig {
    fn from(c: SimulationConfig) -> Self {
        Self {
            simulate_cold_start: c.simulate_cold_start,
            simulation_shortcut_id: c.simulation_shortcut_id,
            simulation_shortcut_ids: c.simulation_shortcut_ids,
        }
    }
}

/// Icon argument for the platform's create call.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiIconSpec {
    /// Platform icon resource by symbolic name (e.g. `LOVE`).
    System { name: String },
    /// PNG bytes.
    Encoded { png: Vec<u8> },
    Empty,
}

impl From<&IconSpec> for FfiIconSpec {
    fn from(icon: &IconSpec) -> Self {
        match icon {
            IconSpec::System(icon) => FfiIconSpec::System {
                name: icon.as_str().to_string(),
            },
            IconSpec::Encoded(png) => FfiIconSpec::Encoded { png: png.clone() },
            IconSpec::Empty => FfiIconSpec::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiIconKind {
    System,
    Encoded,
    Empty,
}

impl From<IconKind> for FfiIconKind {
    fn from(kind: IconKind) -> Self {
        match kind {
            IconKind::System => FfiIconKind::System,
            IconKind::Encoded => FfiIconKind::Encoded,
            IconKind::Empty => FfiIconKind::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiCreateOutcome {
    Created { icon: FfiIconKind },
    AlreadyExists,
    Unsupported,
}

impl From<CreateOutcome> for FfiCreateOutcome {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created { icon } => FfiCreateOutcome::Created { icon: icon.into() },
            CreateOutcome::AlreadyExists => FfiCreateOutcome::AlreadyExists,
            CreateOutcome::Unsupported => FfiCreateOutcome::Unsupported,
        }
    }
}

/// Check and encode an icon the way `create` would.
///
/// Returns the PNG bytes, or `None` when the icon would be dropped.
#[uniffi::export]
pub fn encode_icon(icon: FfiIconImage) -> Option<Vec<u8>> {
    let icon = IconImage::from(icon);
    match dynshort::check_icon(Some(&icon)) {
        dynshort::IconEligibility::Eligible(png) => Some(png),
        dynshort::IconEligibility::Ineligible(_) => None,
    }
}

// =============================================================================
// Host callback interfaces
// =============================================================================

/// The host's dynamic shortcut service.
#[uniffi::export(with_foreign)]
pub trait FfiPlatformShortcutService: Send + Sync {
    fn create_dynamic_shortcut(
        &self,
        activity: String,
        id: String,
        short_label: String,
        long_label: String,
        icon: FfiIconSpec,
    ) -> Result<(), FfiError>;

    fn remove_dynamic_shortcut(&self, id: String) -> Result<(), FfiError>;

    fn dynamic_shortcut_count(&self) -> Result<u32, FfiError>;

    fn dynamic_shortcut_ids(&self) -> Result<Vec<String>, FfiError>;

    fn has_dynamic_shortcut_id(&self, id: String) -> Result<bool, FfiError>;
}

/// String extras on the host's launch intent.
#[uniffi::export(with_foreign)]
pub trait FfiIntentExtras: Send + Sync {
    fn has_extra(&self, key: String) -> bool;

    fn get_string_extra(&self, key: String) -> Option<String>;

    fn remove_extra(&self, key: String);
}

#[uniffi::export(with_foreign)]
pub trait FfiShortcutObserver: Send + Sync {
    fn on_shortcut_triggered(&self, id: String, kind: TriggerKind);
}

struct ForeignShortcutService(Arc<dyn FfiPlatformShortcutService>);

fn native_error(operation: &str, err: FfiError) -> ShortcutError {
    ShortcutError::native(operation, err.to_string())
}

impl PlatformShortcutService for ForeignShortcutService {
    fn create_dynamic_shortcut(
        &self,
        activity: &str,
        id: &str,
        short_label: &str,
        long_label: &str,
        icon: &IconSpec,
    ) -> dynshort::Result<()> {
        self.0
            .create_dynamic_shortcut(
                activity.to_string(),
                id.to_string(),
                short_label.to_string(),
                long_label.to_string(),
                icon.into(),
            )
            .map_err(|e| native_error("create_dynamic_shortcut", e))
    }

    fn remove_dynamic_shortcut(&self, id: &str) -> dynshort::Result<()> {
        self.0
            .remove_dynamic_shortcut(id.to_string())
            .map_err(|e| native_error("remove_dynamic_shortcut", e))
    }

    fn dynamic_shortcut_count(&self) -> dynshort::Result<u32> {
        self.0
            .dynamic_shortcut_count()
            .map_err(|e| native_error("get_dynamic_shortcut_count", e))
    }

    fn dynamic_shortcut_ids(&self) -> dynshort::Result<Vec<String>> {
        self.0
            .dynamic_shortcut_ids()
            .map_err(|e| native_error("get_dynamic_shortcut_ids", e))
    }

    fn has_dynamic_shortcut_id(&self, id: &str) -> dynshort::Result<bool> {
        self.0
            .has_dynamic_shortcut_id(id.to_string())
            .map_err(|e| native_error("has_dynamic_shortcut_id", e))
    }
}

struct ForeignIntentExtras(Arc<dyn FfiIntentExtras>);

impl IntentExtras for ForeignIntentExtras {
    fn has_extra(&self, key: &str) -> bool {
        self.0.has_extra(key.to_string())
    }

    fn get_string_extra(&self, key: &str) -> Option<String> {
        self.0.get_string_extra(key.to_string())
    }

    fn remove_extra(&self, key: &str) {
        self.0.remove_extra(key.to_string())
    }
}

struct ForeignObserver(Arc<dyn FfiShortcutObserver>);

impl ShortcutObserver for ForeignObserver {
    fn on_shortcut_triggered(&self, id: &str, kind: TriggerKind) {
        self.0.on_shortcut_triggered(id.to_string(), kind)
    }
}

// =============================================================================
// FfiShortcutManager
// =============================================================================

/// Shortcut manager handle for foreign callers.
///
/// ```kotlin
/// val manager = FfiShortcutManager.native(service, "com.example.game.MainActivity", intent)
/// manager.subscribe(observer)
/// manager.onColdStart()
/// ```
#[derive(uniffi::Object)]
pub struct FfiShortcutManager {
    inner: ShortcutManager,
}

#[uniffi::export]
impl FfiShortcutManager {
    /// Manager backed by the host's shortcut service.
    ///
    /// `intent` is the activity's launch intent; its `shortcut_ID` extra is
    /// read and cleared on every foreground check.
    #[uniffi::constructor]
    pub fn native(
        service: Arc<dyn FfiPlatformShortcutService>,
        main_activity: String,
        intent: Arc<dyn FfiIntentExtras>,
    ) -> Result<Arc<Self>, FfiError> {
        let source = IntentExtraSource::new(Arc::new(ForeignIntentExtras(intent)));
        let inner = ShortcutManager::builder()
            .native(Arc::new(ForeignShortcutService(service)), main_activity)
            .launch_source(Arc::new(source))
            .build()?;
        Ok(Arc::new(Self { inner }))
    }

    /// Editor/test manager. Never reaches a platform.
    #[uniffi::constructor]
    pub fn simulated(config: Option<FfiSimulationConfig>) -> Result<Arc<Self>, FfiError> {
        let inner = ShortcutManager::builder()
            .simulated()
            .simulation_config(config.map(SimulationConfig::from).unwrap_or_default())
            .build()?;
        Ok(Arc::new(Self { inner }))
    }

    /// Manager for platforms without a shortcut service.
    #[uniffi::constructor]
    pub fn disabled() -> Result<Arc<Self>, FfiError> {
        let inner = ShortcutManager::builder().disabled().build()?;
        Ok(Arc::new(Self { inner }))
    }

    /// "native", "simulated" or "disabled".
    pub fn backend_kind(&self) -> String {
        self.inner.backend_kind().as_str().to_string()
    }

    // ========================================
    // Shortcut Methods
    // ========================================

    pub fn create(&self, request: FfiShortcutRequest) -> Result<FfiCreateOutcome, FfiError> {
        let outcome = self.inner.create(&request.into())?;
        Ok(outcome.into())
    }

    pub fn remove(&self, id: String) -> Result<(), FfiError> {
        Ok(self.inner.remove(&id)?)
    }

    pub fn exists(&self, id: String) -> Result<bool, FfiError> {
        Ok(self.inner.exists(&id)?)
    }

    pub fn count(&self) -> Result<u32, FfiError> {
        Ok(self.inner.count()?)
    }

    pub fn list_ids(&self) -> Result<Vec<String>, FfiError> {
        Ok(self.inner.list_ids()?)
    }

    // ========================================
    // Observer Methods
    // ========================================

    /// Returns a handle for `unsubscribe`.
    pub fn subscribe(&self, observer: Arc<dyn FfiShortcutObserver>) -> u64 {
        self.inner
            .subscribe(Arc::new(ForeignObserver(observer)))
            .value()
    }

    pub fn unsubscribe(&self, handle: u64) -> bool {
        self.inner.unsubscribe(ObserverId::from(handle))
    }

    // ========================================
    // Lifecycle Methods
    // ========================================

    pub fn is_first_launch(&self) -> bool {
        self.inner.is_first_launch()
    }

    pub fn on_cold_start(&self) -> Option<FfiShortcutTrigger> {
        self.inner.on_cold_start().map(FfiShortcutTrigger::from)
    }

    pub fn on_foreground_resumed(&self) -> Option<FfiShortcutTrigger> {
        self.inner
            .on_foreground_resumed()
            .map(FfiShortcutTrigger::from)
    }

    pub fn on_pause_changed(&self, paused: bool) -> Option<FfiShortcutTrigger> {
        self.inner
            .on_pause_changed(paused)
            .map(FfiShortcutTrigger::from)
    }

    /// Deliver a made-up trigger to observers. Simulated managers only.
    pub fn simulate(&self, id: String, kind: TriggerKind) -> Option<FfiShortcutTrigger> {
        self.inner.simulate(&id, kind).map(FfiShortcutTrigger::from)
    }

    pub fn simulation_config(&self) -> FfiSimulationConfig {
        self.inner.simulation().clone().into()
    }
}
