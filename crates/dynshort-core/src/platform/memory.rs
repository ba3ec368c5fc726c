//! In-process shortcut service.
//!
//! Follows the platform's rules closely enough to stand in for it: IDs are
//! unique, re-adding an ID updates it in place, enumeration keeps insertion
//! order, and adding past the per-activity cap fails.

use super::PlatformShortcutService;
use crate::config::PlatformConfig;
use crate::error::{Result, ShortcutError};
use crate::icon::IconSpec;
use std::sync::RwLock;
use tracing::debug;

/// A shortcut as held by [`InMemoryShortcutService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredShortcut {
    pub id: String,
    pub activity: String,
    pub short_label: String,
    pub long_label: String,
    pub icon: IconSpec,
}

/// Shortcut service that keeps its state in memory.
#[derive(Debug)]
pub struct InMemoryShortcutService {
    max_shortcuts: usize,
    shortcuts: RwLock<Vec<StoredShortcut>>,
}

impl InMemoryShortcutService {
    /// Create a service with the platform's default cap.
    pub fn new() -> Self {
        Self::with_capacity(PlatformConfig::MAX_DYNAMIC_SHORTCUTS)
    }

    pub fn with_capacity(max_shortcuts: usize) -> Self {
        Self {
            max_shortcuts,
            shortcuts: RwLock::new(Vec::new()),
        }
    }

    /// Look up a stored shortcut.
    pub fn get(&self, id: &str) -> Option<StoredShortcut> {
        self.shortcuts
            .read()
            .ok()?
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    fn lock_error(operation: &str) -> ShortcutError {
        ShortcutError::native(operation, "shortcut store lock poisoned")
    }
}

impl Default for InMemoryShortcutService {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformShortcutService for InMemoryShortcutService {
    fn create_dynamic_shortcut(
        &self,
        activity: &str,
        id: &str,
        short_label: &str,
        long_label: &str,
        icon: &IconSpec,
    ) -> Result<()> {
        const OPERATION: &str = "create_dynamic_shortcut";
        let mut shortcuts = self
            .shortcuts
            .write()
            .map_err(|_| Self::lock_error(OPERATION))?;

        let shortcut = StoredShortcut {
            id: id.to_string(),
            activity: activity.to_string(),
            short_label: short_label.to_string(),
            long_label: long_label.to_string(),
            icon: icon.clone(),
        };

        if let Some(existing) = shortcuts.iter_mut().find(|s| s.id == id) {
            debug!("Updating stored shortcut {}", id);
            *existing = shortcut;
            return Ok(());
        }

        if shortcuts.len() >= self.max_shortcuts {
            return Err(ShortcutError::native(
                OPERATION,
                format!(
                    "Max number of dynamic shortcuts exceeded ({})",
                    self.max_shortcuts
                ),
            ));
        }

        shortcuts.push(shortcut);
        Ok(())
    }

    fn remove_dynamic_shortcut(&self, id: &str) -> Result<()> {
        let mut shortcuts = self
            .shortcuts
            .write()
            .map_err(|_| Self::lock_error("remove_dynamic_shortcut"))?;
        shortcuts.retain(|s| s.id != id);
        Ok(())
    }

    fn dynamic_shortcut_count(&self) -> Result<u32> {
        let shortcuts = self
            .shortcuts
            .read()
            .map_err(|_| Self::lock_error("get_dynamic_shortcut_count"))?;
        Ok(shortcuts.len() as u32)
    }

    fn dynamic_shortcut_ids(&self) -> Result<Vec<String>> {
        let shortcuts = self
            .shortcuts
            .read()
            .map_err(|_| Self::lock_error("get_dynamic_shortcut_ids"))?;
        Ok(shortcuts.iter().map(|s| s.id.clone()).collect())
    }

    fn has_dynamic_shortcut_id(&self, id: &str) -> Result<bool> {
        let shortcuts = self
            .shortcuts
            .read()
            .map_err(|_| Self::lock_error("has_dynamic_shortcut_id"))?;
        Ok(shortcuts.iter().any(|s| s.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SystemIcon;

    fn add(service: &InMemoryShortcutService, id: &str) -> Result<()> {
        service.create_dynamic_shortcut("Main", id, id, id, &IconSpec::Empty)
    }

    #[test]
    fn test_insertion_order() {
        let service = InMemoryShortcutService::new();
        add(&service, "a.b.y").unwrap();
        add(&service, "a.b.x").unwrap();
        assert_eq!(
            service.dynamic_shortcut_ids().unwrap(),
            vec!["a.b.y".to_string(), "a.b.x".to_string()]
        );
    }

    #[test]
    fn test_readd_updates_in_place() {
        let service = InMemoryShortcutService::new();
        add(&service, "a.b.x").unwrap();
        service
            .create_dynamic_shortcut(
                "Main",
                "a.b.x",
                "new",
                "New",
                &IconSpec::System(SystemIcon::Play),
            )
            .unwrap();

        assert_eq!(service.dynamic_shortcut_count().unwrap(), 1);
        let stored = service.get("a.b.x").unwrap();
        assert_eq!(stored.short_label, "new");
        assert_eq!(stored.icon, IconSpec::System(SystemIcon::Play));
    }

    #[test]
    fn test_cap_is_enforced() {
        let service = InMemoryShortcutService::with_capacity(2);
        add(&service, "one").unwrap();
        add(&service, "two").unwrap();

        let err = add(&service, "three").unwrap_err();
        assert!(err.is_native());
        assert_eq!(service.dynamic_shortcut_count().unwrap(), 2);

        // Updating an existing ID still works at the cap.
        add(&service, "two").unwrap();
    }

    #[test]
    fn test_remove_unknown_is_ok() {
        let service = InMemoryShortcutService::new();
        add(&service, "a.b.x").unwrap();
        service.remove_dynamic_shortcut("missing").unwrap();
        assert!(service.has_dynamic_shortcut_id("a.b.x").unwrap());
        service.remove_dynamic_shortcut("a.b.x").unwrap();
        assert!(!service.has_dynamic_shortcut_id("a.b.x").unwrap());
    }
}
