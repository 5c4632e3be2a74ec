//! The downstream boundary: where state changes leave the crate.
//!
//! The host input subsystem (or any other consumer) implements
//! [`EventSink`] and receives one batched notification per state
//! transition. [`RecordingSink`] is the in-process stand-in used by tests
//! and demos.

use std::sync::{Arc, Mutex, PoisonError};

/// Consumer of device notifications.
///
/// Every state transition performs exactly one of
/// [`configure_axes`](Self::configure_axes) /
/// [`report_position`](Self::report_position), followed by exactly one
/// [`sync`](Self::sync) marking the end of the batch.
///
/// Sinks are invoked while the tablet's internal lock is held, so an
/// implementation must not call back into the control surface.
pub trait EventSink: Send {
    /// Declare or update the legal range of the two absolute axes.
    fn configure_axes(&mut self, min_x: i32, max_x: i32, min_y: i32, max_y: i32);

    /// Deliver a coordinate update. Values are already clamped.
    fn report_position(&mut self, x: i32, y: i32);

    /// Mark the end of one logical update batch.
    fn sync(&mut self);
}

/// A single notification as observed by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    AxesConfigured {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
    PositionReported {
        x: i32,
        y: i32,
    },
    Synced,
}

/// Buffers every notification for later inspection.
///
/// Clones share one buffer, so a handle kept outside the tablet still sees
/// what the boxed copy inside it recorded.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffered notifications and clears the buffer.
    pub fn take(&self) -> Vec<SinkEvent> {
        std::mem::take(&mut *self.buf())
    }

    /// Number of buffered [`SinkEvent::Synced`] markers.
    pub fn sync_count(&self) -> usize {
        self.buf()
            .iter()
            .filter(|e| matches!(e, SinkEvent::Synced))
            .count()
    }

    fn buf(&self) -> std::sync::MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for RecordingSink {
    fn configure_axes(&mut self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) {
        self.buf().push(SinkEvent::AxesConfigured {
            min_x,
            max_x,
            min_y,
            max_y,
        });
    }

    fn report_position(&mut self, x: i32, y: i32) {
        self.buf().push(SinkEvent::PositionReported { x, y });
    }

    fn sync(&mut self) {
        self.buf().push(SinkEvent::Synced);
    }
}
