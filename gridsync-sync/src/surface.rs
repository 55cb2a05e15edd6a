//! The client surface abstraction.

use crate::protocol::{ClientEvent, LayoutProperties};
use thiserror::Error;

/// A property write the surface could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("client surface error: {0}")]
pub struct SurfaceError(pub String);

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Sink for outbound layout properties.
///
/// Implementations forward the properties to whatever transport reaches the
/// client editor. Surfaces whose change detection reflects property writes
/// back as client events return those events from
/// [`take_mirrored_events`](ClientSurface::take_mirrored_events); the
/// controller processes them while the echo gate is still raised.
pub trait ClientSurface {
    /// Writes `(layoutData, revision, columns, rowHeight, compact, compactType)`.
    fn write_layout(&mut self, properties: &LayoutProperties) -> Result<(), SurfaceError>;

    /// Events produced synchronously by the last write.
    fn take_mirrored_events(&mut self) -> Vec<ClientEvent> {
        Vec::new()
    }
}

impl<S: ClientSurface + ?Sized> ClientSurface for Box<S> {
    fn write_layout(&mut self, properties: &LayoutProperties) -> Result<(), SurfaceError> {
        (**self).write_layout(properties)
    }

    fn take_mirrored_events(&mut self) -> Vec<ClientEvent> {
        (**self).take_mirrored_events()
    }
}

/// Recording surfaces for testing.
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex, MutexGuard};

    #[derive(Debug, Default)]
    struct Recorded {
        writes: Vec<LayoutProperties>,
        mirror: bool,
        pending_mirror: Vec<ClientEvent>,
        fail_next: Option<String>,
    }

    /// A surface that records every write.
    ///
    /// Clones share the same record, so a test can keep one handle while
    /// the controller owns another.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSurface {
        inner: Arc<Mutex<Recorded>>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// A surface that mirrors each write back as a client event
        /// carrying the pushed items and revision.
        pub fn mirroring() -> Self {
            let surface = Self::default();
            surface.lock().mirror = true;
            surface
        }

        fn lock(&self) -> MutexGuard<'_, Recorded> {
            // A poisoned record still holds valid data for assertions.
            self.inner.lock().unwrap_or_else(|e| e.into_inner())
        }

        /// All writes so far, oldest first.
        pub fn writes(&self) -> Vec<LayoutProperties> {
            self.lock().writes.clone()
        }

        pub fn last_write(&self) -> Option<LayoutProperties> {
            self.lock().writes.last().cloned()
        }

        pub fn write_count(&self) -> usize {
            self.lock().writes.len()
        }

        /// Makes the next write fail with `message`.
        pub fn fail_next_write(&self, message: impl Into<String>) {
            self.lock().fail_next = Some(message.into());
        }
    }

    impl ClientSurface for RecordingSurface {
        fn write_layout(&mut self, properties: &LayoutProperties) -> Result<(), SurfaceError> {
            let mut recorded = self.lock();
            if let Some(message) = recorded.fail_next.take() {
                return Err(SurfaceError(message));
            }
            recorded.writes.push(properties.clone());
            if recorded.mirror {
                let items = serde_json::Value::String(properties.layout_data.clone());
                recorded
                    .pending_mirror
                    .push(ClientEvent::new(items, properties.revision));
            }
            Ok(())
        }

        fn take_mirrored_events(&mut self) -> Vec<ClientEvent> {
            std::mem::take(&mut self.lock().pending_mirror)
        }
    }
}
