//! The shortcut facade.
//!
//! [`ShortcutManager`] is the only type most callers need: it creates and
//! queries shortcuts through the selected backend and turns foreground
//! transitions into triggers for its observers.

mod builder;
mod manager;

pub use builder::ShortcutManagerBuilder;
pub use manager::{CreateOutcome, ShortcutManager};
