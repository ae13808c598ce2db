//! Liveness flag for async work started by a view.
//!
//! Requests are not cancelled on the wire; their completions check the flag
//! and drop results once the owning view is gone.

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Lifetime {
    active: Arc<AtomicBool>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a flag that ends when the current reactive owner is cleaned up.
    pub fn attach() -> Self {
        let lifetime = Self::new();
        let on_teardown = lifetime.clone();
        on_cleanup(move || on_teardown.end());
        lifetime
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}
