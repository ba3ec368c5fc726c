//! Centralized configuration for the shortcut bridge.
//!
//! Constants for the launch intent and platform limits, the backend
//! selector, and the file-backed simulation settings used by test harnesses.

use crate::error::{Result, ShortcutError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Launch intent configuration.
pub struct IntentConfig;

impl IntentConfig {
    /// Intent extra carrying the ID of the shortcut that launched the app.
    pub const SHORTCUT_ID_EXTRA: &'static str = "shortcut_ID";
}

/// Platform limits mirrored by the in-memory service.
pub struct PlatformConfig;

impl PlatformConfig {
    /// Dynamic shortcuts allowed per activity on current Android releases.
    pub const MAX_DYNAMIC_SHORTCUTS: usize = 15;
    /// Icon edge length the launcher renders without scaling artifacts.
    pub const RECOMMENDED_ICON_SIZE: u32 = 64;
}

/// Which shortcut backend the manager is composed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Native,
    Simulated,
    Disabled,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Native => "native",
            BackendKind::Simulated => "simulated",
            BackendKind::Disabled => "disabled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "native" => Some(BackendKind::Native),
            "simulated" => Some(BackendKind::Simulated),
            "disabled" => Some(BackendKind::Disabled),
            _ => None,
        }
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Disabled
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for the simulated backend.
///
/// `simulation_shortcut_ids` is the pick list offered to tooling; its first
/// entry is the [`SimulationConfig::NO_TARGET`] placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Deliver a cold-start trigger for `simulation_shortcut_id` at startup.
    pub simulate_cold_start: bool,
    /// Shortcut ID used by simulated deliveries.
    pub simulation_shortcut_id: String,
    /// IDs available for simulation.
    pub simulation_shortcut_ids: Vec<String>,
}

impl SimulationConfig {
    /// Placeholder meaning "no simulation target selected".
    pub const NO_TARGET: &'static str = "none";

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ShortcutError::io_with_path(e, path))?;
        let config: SimulationConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Whether `id` names an actual simulation target.
    pub fn is_target(id: &str) -> bool {
        let id = id.trim();
        !id.is_empty() && id != Self::NO_TARGET
    }

    /// Whether `id` is on the simulation pick list. An empty list allows
    /// any ID.
    pub fn is_listed(&self, id: &str) -> bool {
        self.simulation_shortcut_ids.is_empty()
            || self.simulation_shortcut_ids.iter().any(|listed| listed == id)
    }

    /// The configured target, if one is selected.
    pub fn target(&self) -> Option<&str> {
        Self::is_target(&self.simulation_shortcut_id).then_some(self.simulation_shortcut_id.as_str())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulate_cold_start: false,
            simulation_shortcut_id: Self::NO_TARGET.to_string(),
            simulation_shortcut_ids: vec![
                Self::NO_TARGET.to_string(),
                "com.example.gamename.love".to_string(),
                "com.example.gamename.daily_gift".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_kind_roundtrip() {
        for kind in [
            BackendKind::Native,
            BackendKind::Simulated,
            BackendKind::Disabled,
        ] {
            let parsed = BackendKind::from_str(kind.as_str()).expect("Should parse");
            assert_eq!(kind, parsed);
        }
        assert_eq!(BackendKind::from_str("Native"), Some(BackendKind::Native));
        assert_eq!(BackendKind::from_str("editor"), None);
    }

    #[test]
    fn test_default_simulation_has_no_target() {
        let config = SimulationConfig::default();
        assert!(!config.simulate_cold_start);
        assert_eq!(config.target(), None);
        assert_eq!(config.simulation_shortcut_ids[0], SimulationConfig::NO_TARGET);
    }

    #[test]
    fn test_is_target() {
        assert!(!SimulationConfig::is_target(""));
        assert!(!SimulationConfig::is_target("none"));
        assert!(!SimulationConfig::is_target("  "));
        assert!(SimulationConfig::is_target("com.example.gamename.love"));
    }

    #[test]
    fn test_is_listed() {
        let config = SimulationConfig::default();
        assert!(config.is_listed("com.example.gamename.daily_gift"));
        assert!(!config.is_listed("com.example.gamename.unknown"));

        let open = SimulationConfig {
            simulation_shortcut_ids: Vec::new(),
            ..SimulationConfig::default()
        };
        assert!(open.is_listed("anything"));
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("simulation.json");
        std::fs::write(
            &path,
            r#"{ "simulate_cold_start": true, "simulation_shortcut_id": "a.b.x" }"#,
        )
        .unwrap();

        let config = SimulationConfig::load(&path).unwrap();
        assert!(config.simulate_cold_start);
        assert_eq!(config.target(), Some("a.b.x"));
        assert_eq!(config.simulation_shortcut_ids.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = SimulationConfig::load(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(ShortcutError::Io { path: Some(_), .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SimulationConfig::load(&path),
            Err(ShortcutError::Json { .. })
        ));
    }
}
