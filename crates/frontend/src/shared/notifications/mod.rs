//! Transient notifications ("snackbars") shown after user actions.
//!
//! - queue.rs: `NotificationQueue`, plain data with stable ids
//! - snackbar.rs: `Snackbar` / `SnackbarStack` components

mod queue;
mod snackbar;

pub use queue::{Notification, NotificationKind, NotificationQueue};
pub use snackbar::{Snackbar, SnackbarStack};
