//! A sink that logs every notification.

use crate::sink::EventSink;

/// Logs notifications through `tracing` instead of delivering them to a
/// host. Useful as a stand-in consumer while debugging operators that
/// drive the control surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        LogSink
    }
}

impl EventSink for LogSink {
    fn configure_axes(&mut self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) {
        tracing::info!(min_x, max_x, min_y, max_y, "axis ranges configured");
    }

    fn report_position(&mut self, x: i32, y: i32) {
        tracing::debug!(x, y, "position reported");
    }

    fn sync(&mut self) {
        tracing::trace!("sync");
    }
}
