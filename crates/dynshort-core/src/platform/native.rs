//! Backend that forwards to the host's shortcut service.

use super::{Dispatch, PlatformShortcutService, ShortcutBackend};
use crate::config::BackendKind;
use crate::error::Result;
use crate::icon::IconSpec;
use crate::models::ShortcutRequest;
use std::sync::Arc;
use tracing::debug;

/// Real platform backend.
pub struct NativeBackend {
    service: Arc<dyn PlatformShortcutService>,
    /// Activity the shortcuts launch, resolved by the host at startup.
    main_activity: String,
}

impl NativeBackend {
    pub fn new(service: Arc<dyn PlatformShortcutService>, main_activity: impl Into<String>) -> Self {
        Self {
            service,
            main_activity: main_activity.into(),
        }
    }
}

impl ShortcutBackend for NativeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn create_shortcut(&self, request: &ShortcutRequest, icon: &IconSpec) -> Result<Dispatch> {
        debug!(
            "Creating dynamic shortcut {} for {} ({:?} icon)",
            request.id,
            self.main_activity,
            icon.kind()
        );
        self.service.create_dynamic_shortcut(
            &self.main_activity,
            &request.id,
            &request.short_label,
            &request.long_label,
            icon,
        )?;
        Ok(Dispatch::Sent)
    }

    fn remove_shortcut(&self, id: &str) -> Result<Dispatch> {
        debug!("Removing dynamic shortcut {}", id);
        self.service.remove_dynamic_shortcut(id)?;
        Ok(Dispatch::Sent)
    }

    fn has_shortcut(&self, id: &str) -> Result<bool> {
        self.service.has_dynamic_shortcut_id(id)
    }

    fn shortcut_count(&self) -> Result<u32> {
        self.service.dynamic_shortcut_count()
    }

    fn shortcut_ids(&self) -> Result<Vec<String>> {
        self.service.dynamic_shortcut_ids()
    }
}
