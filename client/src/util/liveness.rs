//! Mount flag shared between a component and its in-flight task.
//!
//! The component retires the flag in `on_cleanup`; the task checks it before
//! touching reactive state that may already be disposed.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle; all clones observe the same flag.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// A live flag.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone. Idempotent.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
