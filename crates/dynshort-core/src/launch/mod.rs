//! Launch-signal tracking.
//!
//! Provides:
//! - [`LaunchIntentSource`], the atomic read-and-clear view of the platform's
//!   pending shortcut marker, with in-process and intent-extra sources
//! - [`LaunchTracker`], which separates the cold start from later resumes

mod signal;
mod tracker;

pub use signal::{IntentExtraSource, IntentExtras, LaunchIntentSource, LaunchSignal};
pub use tracker::LaunchTracker;
