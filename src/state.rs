//! Canonical tablet state: axis bounds, current position, clamping.
//!
//! [`TabletState`] is the single source of truth for the emulated device.
//! Both mutating operations are infallible and finish with exactly one
//! batched notification to the downstream [`EventSink`] — never one per
//! axis.

use serde::{Deserialize, Serialize};

use crate::sink::EventSink;

/// Inclusive per-axis bounds of the tablet surface.
///
/// No ordering is enforced between the `min*` and `max*` fields; callers
/// may set crossed or degenerate bounds. See [`TabletState::set_position`]
/// for how clamping behaves in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub minx: i32,
    pub maxx: i32,
    pub miny: i32,
    pub maxy: i32,
}

impl Default for Bounds {
    /// The reference device's power-on range: `[0, 4096]` on both axes.
    fn default() -> Self {
        Self {
            minx: 0,
            maxx: 4096,
            miny: 0,
            maxy: 4096,
        }
    }
}

/// Bounds plus current position of the emulated tablet.
///
/// There is exactly one instance per device, owned by
/// [`VirtualTablet`](crate::tablet::VirtualTablet) for its whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct TabletState {
    bounds: Bounds,
    x: i32,
    y: i32,
}

impl TabletState {
    /// New state at position `(0, 0)`.
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, x: 0, y: 0 }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Replaces all four bounds and announces the new axis ranges.
    ///
    /// The current position is left untouched: shrinking the bounds below
    /// the stored position does **not** re-clamp it. The position catches
    /// up on the next [`set_position`](Self::set_position).
    pub fn set_bounds(&mut self, bounds: Bounds, sink: &mut dyn EventSink) {
        self.bounds = bounds;

        sink.configure_axes(bounds.minx, bounds.maxx, bounds.miny, bounds.maxy);
        sink.sync();
    }

    /// Clamps `(x, y)` into the current bounds, stores the result and
    /// reports it downstream.
    ///
    /// The reported coordinates are the clamped values, not the raw input.
    pub fn set_position(&mut self, x: i32, y: i32, sink: &mut dyn EventSink) {
        self.x = clamp(x, self.bounds.minx, self.bounds.maxx);
        self.y = clamp(y, self.bounds.miny, self.bounds.maxy);

        sink.report_position(self.x, self.y);
        sink.sync();
    }
}

/// `lo` if `v < lo`, else `hi` if `v > hi`, else `v`.
///
/// The branch order matters for crossed bounds (`lo > hi`): the lower
/// check runs first, so `clamp(3, 5, 0)` is `5` while `clamp(100, 5, 0)`
/// is `0`. Callers setting degenerate bounds get that defined outcome,
/// which is also why `i32::clamp` (panics when `lo > hi`) is not used.
fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp(0, 0, 4096), 0);
        assert_eq!(clamp(2048, 0, 4096), 2048);
        assert_eq!(clamp(4096, 0, 4096), 4096);
    }

    #[test]
    fn clamp_raises_to_lower_bound() {
        assert_eq!(clamp(-1, 0, 4096), 0);
        assert_eq!(clamp(i32::MIN, -10, 10), -10);
    }

    #[test]
    fn clamp_lowers_to_upper_bound() {
        assert_eq!(clamp(5000, 0, 4096), 4096);
        assert_eq!(clamp(i32::MAX, -10, 10), 10);
    }

    #[test]
    fn clamp_crossed_bounds_lower_check_wins() {
        // lo > hi: anything below lo snaps to lo, even if above hi.
        assert_eq!(clamp(3, 5, 0), 5);
        assert_eq!(clamp(-10, 5, 0), 5);
        assert_eq!(clamp(100, 5, 0), 0);
    }

    #[test]
    fn set_position_stays_within_bounds() {
        let mut sink = RecordingSink::new();
        let mut state = TabletState::new(Bounds::default());

        for (x, y) in [(5000, -3), (-1, 9000), (123, 456), (i32::MAX, i32::MIN)] {
            state.set_position(x, y, &mut sink);
            let (px, py) = state.position();
            assert!((0..=4096).contains(&px), "x out of bounds: {px}");
            assert!((0..=4096).contains(&py), "y out of bounds: {py}");
        }
    }

    #[test]
    fn set_position_reports_clamped_values() {
        let mut sink = RecordingSink::new();
        let mut state = TabletState::new(Bounds::default());

        state.set_position(5000, -3, &mut sink);

        assert_eq!(state.position(), (4096, 0));
        assert_eq!(
            sink.take(),
            vec![
                SinkEvent::PositionReported { x: 4096, y: 0 },
                SinkEvent::Synced,
            ]
        );
    }

    #[test]
    fn set_bounds_does_not_move_position() {
        let mut sink = RecordingSink::new();
        let mut state = TabletState::new(Bounds::default());

        state.set_position(3000, 3000, &mut sink);
        state.set_bounds(
            Bounds {
                minx: 0,
                maxx: 100,
                miny: 0,
                maxy: 100,
            },
            &mut sink,
        );

        // Shrinking leaves the stale position in place until the next write.
        assert_eq!(state.position(), (3000, 3000));

        state.set_position(3000, 3000, &mut sink);
        assert_eq!(state.position(), (100, 100));
    }

    #[test]
    fn each_operation_syncs_exactly_once() {
        let mut sink = RecordingSink::new();
        let mut state = TabletState::new(Bounds::default());

        state.set_bounds(Bounds::default(), &mut sink);
        assert_eq!(sink.sync_count(), 1);
        sink.take();

        state.set_position(10, 20, &mut sink);
        assert_eq!(sink.sync_count(), 1);
    }
}
