// SPDX-License-Identifier: GPL-3.0-only

//! Bounded reuse pool for event shells
//!
//! Detection events fire for every analyzed frame, so spent instances are
//! kept for reuse instead of reallocating on the hot path. The pool is a
//! fixed-capacity free list behind a mutex: acquisition never blocks beyond
//! the critical section, and releasing into a full pool drops the instance.

use std::sync::Mutex;
use tracing::trace;

/// Fixed-capacity free list of reusable instances
///
/// One static pool exists per event type. Acquiring from an empty pool
/// returns `None` and callers fall through to plain allocation, so the pool
/// is an optimization that can never stall an event.
pub struct EventPool<T> {
    shells: Mutex<Vec<T>>,
    capacity: usize,
}

impl<T> EventPool<T> {
    /// Create an empty pool holding at most `capacity` instances
    pub const fn new(capacity: usize) -> Self {
        Self {
            shells: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Take a pooled instance, if any
    ///
    /// A poisoned pool reports empty. The event path falls back to
    /// allocation instead of propagating another thread's panic.
    pub fn acquire(&self) -> Option<T> {
        let mut shells = self.shells.lock().ok()?;
        shells.pop()
    }

    /// Return a spent instance for reuse
    ///
    /// Pushes back only while under capacity, otherwise the instance is
    /// dropped. Returns whether the instance was pooled.
    pub fn release(&self, shell: T) -> bool {
        if let Ok(mut shells) = self.shells.lock() {
            if shells.len() < self.capacity {
                shells.push(shell);
                return true;
            }
            trace!(capacity = self.capacity, "Event pool full, dropping shell");
        }
        false
    }

    /// Number of instances currently pooled
    pub fn len(&self) -> usize {
        self.shells.lock().map(|shells| shells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
