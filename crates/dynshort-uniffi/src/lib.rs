//! UniFFI bindings for dynshort.
//!
//! This crate exposes the shortcut manager to the host application's own
//! language. The host implements three callback interfaces:
//!
//! - `FfiPlatformShortcutService` - the platform's dynamic shortcut API
//! - `FfiIntentExtras` - string extras on the launch intent
//! - `FfiShortcutObserver` - receives shortcut triggers
//!
//! # Usage
//!
//! Generate bindings using `--library` mode:
//!
//! ```bash
//! # Build the cdylib
//! cargo build -p dynshort-uniffi --release
//!
//! # Generate Kotlin bindings
//! dynshort-uniffi-bindgen generate --library --language kotlin \
//!     --out-dir ./bindings/kotlin target/release/libdynshort_uniffi.so
//! ```

// UniFFI scaffolding - this generates the FFI glue code
uniffi::setup_scaffolding!();

#[cfg(feature = "bindings")]
mod bindings;

#[cfg(feature = "bindings")]
pub use bindings::*;
