//! Change fan-out to external listeners.

use crate::event::LayoutChangeEvent;
use gridsync_types::SubscriptionId;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::warn;

/// Failure reported by a listener. Logged and counted, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Receives committed layout changes.
pub trait LayoutChangeListener: Send {
    fn on_layout_changed(&mut self, event: &LayoutChangeEvent) -> Result<(), ListenerError>;
}

impl<F> LayoutChangeListener for F
where
    F: FnMut(&LayoutChangeEvent) -> Result<(), ListenerError> + Send,
{
    fn on_layout_changed(&mut self, event: &LayoutChangeEvent) -> Result<(), ListenerError> {
        self(event)
    }
}

/// Outcome of one [`ChangeNotifier::notify`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Listeners that returned `Ok`.
    pub delivered: usize,
    /// Listeners that returned an error or panicked.
    pub failed: usize,
}

/// Synchronous, ordered delivery to subscribers.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(SubscriptionId, Box<dyn LayoutChangeListener>)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener after all existing ones.
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: LayoutChangeListener + 'static,
    {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers `event` to every listener in subscription order.
    ///
    /// A listener that errors or panics is logged and skipped; the rest
    /// still receive the event.
    pub fn notify(&mut self, event: &LayoutChangeEvent) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (id, listener) in &mut self.listeners {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener.on_layout_changed(event)));
            match outcome {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    warn!("Layout listener {} failed: {}", id, e);
                    report.failed += 1;
                }
                Err(payload) => {
                    warn!("Layout listener {} panicked: {}", id, panic_message(&*payload));
                    report.failed += 1;
                }
            }
        }
        report
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
