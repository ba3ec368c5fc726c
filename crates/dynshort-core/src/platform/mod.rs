//! Platform capability layer.
//!
//! Everything that differs between a device with a shortcut service, an
//! editor/test harness and an unsupported platform lives behind
//! [`ShortcutBackend`]. The facade is written once against the trait and the
//! implementation is picked when the manager is built.
//!
//! - `native` - forwards to a host-provided [`PlatformShortcutService`]
//! - `simulated` - editor/test harness; no native calls
//! - `disabled` - unsupported platform; no-ops with diagnostics
//! - `memory` - an in-process [`PlatformShortcutService`] with OS-like rules

mod disabled;
mod memory;
mod native;
mod simulated;

pub use disabled::DisabledBackend;
pub use memory::{InMemoryShortcutService, StoredShortcut};
pub use native::NativeBackend;
pub use simulated::SimulatedBackend;

use crate::config::BackendKind;
use crate::error::Result;
use crate::icon::{IconKind, IconSpec};
use crate::models::ShortcutRequest;

/// The host's dynamic shortcut service.
///
/// Implementations own the platform context reference. Failures are
/// reported as [`crate::ShortcutError::Native`] and passed through
/// untouched.
pub trait PlatformShortcutService: Send + Sync {
    fn create_dynamic_shortcut(
        &self,
        activity: &str,
        id: &str,
        short_label: &str,
        long_label: &str,
        icon: &IconSpec,
    ) -> Result<()>;

    /// Removing an unknown ID is not an error.
    fn remove_dynamic_shortcut(&self, id: &str) -> Result<()>;

    fn dynamic_shortcut_count(&self) -> Result<u32>;

    fn dynamic_shortcut_ids(&self) -> Result<Vec<String>>;

    fn has_dynamic_shortcut_id(&self, id: &str) -> Result<bool>;
}

/// Whether a mutating call reached a platform service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Sent,
    Skipped,
}

/// Capability interface selected at composition time.
pub trait ShortcutBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    fn create_shortcut(&self, request: &ShortcutRequest, icon: &IconSpec) -> Result<Dispatch>;

    fn remove_shortcut(&self, id: &str) -> Result<Dispatch>;

    fn has_shortcut(&self, id: &str) -> Result<bool>;

    fn shortcut_count(&self) -> Result<u32>;

    fn shortcut_ids(&self) -> Result<Vec<String>>;

    /// Creates the backend accepted without sending, as `(id, icon kind)`.
    fn recorded_requests(&self) -> Vec<(String, IconKind)> {
        Vec::new()
    }
}

/// Whether this build targets a platform with a dynamic shortcut service.
pub fn platform_has_shortcut_service() -> bool {
    cfg!(target_os = "android")
}
