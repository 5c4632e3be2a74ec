//! Device lifetime: construction, the initialization handshake, teardown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::attrs::ControlSurface;
use crate::config::TabletConfig;
use crate::sink::EventSink;
use crate::state::{Bounds, TabletState};

/// State and sink behind one lock, so a read-modify-notify sequence is
/// atomic with respect to other surface callers.
///
/// Field order pins teardown: the sink goes before the state.
pub(crate) struct Inner {
    pub(crate) sink: Box<dyn EventSink>,
    pub(crate) state: TabletState,
}

impl Inner {
    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.state.set_bounds(bounds, &mut *self.sink);
    }

    pub(crate) fn set_position(&mut self, x: i32, y: i32) {
        self.state.set_position(x, y, &mut *self.sink);
    }
}

/// Device operations are infallible, so a caller that panicked mid-write
/// must not wedge the surface for everyone else.
pub(crate) fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The emulated tablet device.
///
/// Owns the single [`TabletState`] instance and the boxed [`EventSink`]
/// for its whole lifetime. All mutation goes through the
/// [`ControlSurface`] handles returned by [`surface`](Self::surface).
pub struct VirtualTablet {
    inner: Arc<Mutex<Inner>>,
    config: TabletConfig,
}

impl VirtualTablet {
    /// Creates the device and performs the initialization handshake: the
    /// sink receives the configured axis ranges (and a sync) before any
    /// surface handle exists. The position starts at `(0, 0)`.
    pub fn new(config: TabletConfig, mut sink: Box<dyn EventSink>) -> Self {
        let mut state = TabletState::new(config.bounds);
        state.set_bounds(config.bounds, &mut *sink);

        tracing::info!(
            name = %config.meta.name,
            phys = %config.meta.phys,
            vendor = config.meta.vendor,
            product = config.meta.product,
            "virtual tablet loaded"
        );

        Self {
            inner: Arc::new(Mutex::new(Inner { sink, state })),
            config,
        }
    }

    /// Cloneable handle to the six read/write attributes.
    pub fn surface(&self) -> ControlSurface {
        ControlSurface::new(self.inner.clone())
    }

    pub fn config(&self) -> &TabletConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        lock(&self.inner).state.bounds()
    }

    pub fn position(&self) -> (i32, i32) {
        lock(&self.inner).state.position()
    }
}

impl Drop for VirtualTablet {
    fn drop(&mut self) {
        tracing::info!(name = %self.config.meta.name, "virtual tablet unloaded");
    }
}
