//! Dynshort - dynamic home-screen shortcuts for games and apps.
//!
//! This crate creates, removes and queries dynamic launcher shortcuts through
//! a host-provided platform service, and tells the application when one of
//! them launched or resumed it. It has no UI and no engine dependency; the
//! host wires it in by implementing [`PlatformShortcutService`] and
//! [`LaunchIntentSource`] and forwarding its lifecycle callbacks.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynshort::{ShortcutManager, ShortcutRequest, SystemIcon, TriggerKind};
//! use std::sync::Arc;
//!
//! let manager = ShortcutManager::builder()
//!     .native(service, "com.example.game.MainActivity")
//!     .launch_source(intent_source)
//!     .build()?;
//!
//! manager.subscribe(Arc::new(|id: &str, kind: TriggerKind| {
//!     println!("{} triggered by {}", id, kind);
//! }));
//!
//! let love = ShortcutRequest::new("com.example.game.love", "", "Send love")
//!     .with_system_icon(SystemIcon::Love);
//! manager.create(&love)?;
//!
//! // After the host finished starting up:
//! manager.on_cold_start();
//! ```

// UniFFI scaffolding for the enums shared with the bindings crate
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod icon;
pub mod launch;
pub mod models;
pub mod observer;
pub mod platform;

mod shortcut;

// Re-export commonly used types
pub use config::{BackendKind, IntentConfig, PlatformConfig, SimulationConfig};
pub use error::{Result, ShortcutError};
pub use icon::{check_icon, IconEligibility, IconImage, IconKind, IconSpec, PixelFormat};
pub use launch::{IntentExtraSource, IntentExtras, LaunchIntentSource, LaunchSignal};
pub use models::{ShortcutRequest, ShortcutTrigger, SystemIcon, TriggerKind};
pub use observer::{ObserverId, ShortcutObserver};
pub use platform::{InMemoryShortcutService, PlatformShortcutService};
pub use shortcut::{CreateOutcome, ShortcutManager, ShortcutManagerBuilder};
