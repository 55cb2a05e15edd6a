//! Scoped echo suppression.
//!
//! A push raises the gate, writes to the client surface, processes whatever
//! the surface mirrored back, and lowers the gate when the guard drops. The
//! flag is never cleared by a timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "ignore echoes" flag.
///
/// Clones observe the same flag, so a surface adapter can check whether an
/// event it is about to forward originates from a push in progress.
#[derive(Debug, Clone, Default)]
pub struct EchoGate {
    raised: Arc<AtomicBool>,
}

impl EchoGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a push is currently in progress.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Raises the gate until the returned guard is dropped.
    ///
    /// Guards nest: dropping an inner guard restores the state the gate had
    /// when it was created.
    #[must_use = "the gate is lowered as soon as the guard is dropped"]
    pub fn raise(&self) -> EchoGuard {
        let previous = self.raised.swap(true, Ordering::AcqRel);
        EchoGuard {
            gate: self.clone(),
            previous,
        }
    }
}

/// Keeps an [`EchoGate`] raised while alive.
#[derive(Debug)]
pub struct EchoGuard {
    gate: EchoGate,
    previous: bool,
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        self.gate.raised.store(self.previous, Ordering::Release);
    }
}
