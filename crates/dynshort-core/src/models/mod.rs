//! Value types shared across the bridge.

mod request;
mod trigger;

pub use request::{ShortcutRequest, SystemIcon};
pub use trigger::{ShortcutTrigger, TriggerKind};
