//! Editor and test-harness backend.

use super::{Dispatch, ShortcutBackend};
use crate::config::BackendKind;
use crate::error::Result;
use crate::icon::{IconKind, IconSpec};
use crate::models::ShortcutRequest;
use std::sync::RwLock;
use tracing::info;

/// Never reaches a platform. Queries report no shortcuts, the same as the
/// editor would; creates are remembered so tooling can show what a device
/// build would have registered.
#[derive(Debug, Default)]
pub struct SimulatedBackend {
    requested: RwLock<Vec<(String, IconKind)>>,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcutBackend for SimulatedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Simulated
    }

    fn create_shortcut(&self, request: &ShortcutRequest, icon: &IconSpec) -> Result<Dispatch> {
        info!(
            "Cannot create shortcuts in simulation; recorded {} ({:?} icon)",
            request.id,
            icon.kind()
        );
        if let Ok(mut requested) = self.requested.write() {
            requested.push((request.id.clone(), icon.kind()));
        }
        Ok(Dispatch::Skipped)
    }

    fn remove_shortcut(&self, id: &str) -> Result<Dispatch> {
        info!("Cannot remove shortcuts in simulation ({})", id);
        Ok(Dispatch::Skipped)
    }

    fn has_shortcut(&self, _id: &str) -> Result<bool> {
        info!("Shortcuts are not available in simulation");
        Ok(false)
    }

    fn shortcut_count(&self) -> Result<u32> {
        info!("Shortcuts are not available in simulation");
        Ok(0)
    }

    fn shortcut_ids(&self) -> Result<Vec<String>> {
        info!("Shortcuts are not available in simulation");
        Ok(Vec::new())
    }

    fn recorded_requests(&self) -> Vec<(String, IconKind)> {
        self.requested
            .read()
            .map(|requested| requested.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SystemIcon;

    #[test]
    fn test_creates_are_recorded_not_applied() {
        let backend = SimulatedBackend::new();
        let request = ShortcutRequest::new("a.b.love", "", "Love");

        let dispatch = backend
            .create_shortcut(&request, &IconSpec::System(SystemIcon::Love))
            .unwrap();
        assert_eq!(dispatch, Dispatch::Skipped);
        assert_eq!(
            backend.recorded_requests(),
            vec![("a.b.love".to_string(), IconKind::System)]
        );
        assert_eq!(backend.shortcut_count().unwrap(), 0);
        assert!(!backend.has_shortcut("a.b.love").unwrap());
    }
}
