//! Backend for platforms without a shortcut service.

use super::{Dispatch, ShortcutBackend};
use crate::config::BackendKind;
use crate::error::Result;
use crate::icon::IconSpec;
use crate::models::ShortcutRequest;
use tracing::info;

/// Every call is a no-op that logs and returns the empty value.
#[derive(Debug, Default)]
pub struct DisabledBackend;

impl DisabledBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ShortcutBackend for DisabledBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Disabled
    }

    fn create_shortcut(&self, request: &ShortcutRequest, _icon: &IconSpec) -> Result<Dispatch> {
        info!("Unsupported platform; not creating shortcut {}", request.id);
        Ok(Dispatch::Skipped)
    }

    fn remove_shortcut(&self, id: &str) -> Result<Dispatch> {
        info!("Unsupported platform; not removing shortcut {}", id);
        Ok(Dispatch::Skipped)
    }

    fn has_shortcut(&self, _id: &str) -> Result<bool> {
        info!("Unsupported platform; shortcuts are unavailable");
        Ok(false)
    }

    fn shortcut_count(&self) -> Result<u32> {
        info!("Unsupported platform; shortcuts are unavailable");
        Ok(0)
    }

    fn shortcut_ids(&self) -> Result<Vec<String>> {
        info!("Unsupported platform; shortcuts are unavailable");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_empty() {
        let backend = DisabledBackend::new();
        let request = ShortcutRequest::new("a.b.x", "x", "x");

        assert_eq!(
            backend.create_shortcut(&request, &IconSpec::Empty).unwrap(),
            Dispatch::Skipped
        );
        assert_eq!(backend.remove_shortcut("a.b.x").unwrap(), Dispatch::Skipped);
        assert!(!backend.has_shortcut("a.b.x").unwrap());
        assert_eq!(backend.shortcut_count().unwrap(), 0);
        assert!(backend.shortcut_ids().unwrap().is_empty());
    }
}
