//! Control surface: six named textual attributes backed by the device
//! state.
//!
//! Operators inspect and drive the tablet through decimal strings, the way
//! the state is meant to be exposed over a pseudo-file or CLI. Writes are
//! fire-and-forget: a value that does not parse as an integer is silently
//! dropped and the write is still acknowledged.

use std::sync::{Arc, Mutex};

use crate::tablet::{lock, Inner};

/// The six control-surface attributes, bounds first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Maxx,
    Maxy,
    Minx,
    Miny,
    X,
    Y,
}

impl Attr {
    /// Every attribute, in publication order.
    pub const ALL: [Attr; 6] = [
        Attr::Maxx,
        Attr::Maxy,
        Attr::Minx,
        Attr::Miny,
        Attr::X,
        Attr::Y,
    ];

    /// Stable name as published to operators.
    pub fn name(self) -> &'static str {
        match self {
            Attr::Maxx => "maxx",
            Attr::Maxy => "maxy",
            Attr::Minx => "minx",
            Attr::Miny => "miny",
            Attr::X => "x",
            Attr::Y => "y",
        }
    }

    /// Looks an attribute up by its published name.
    pub fn from_name(name: &str) -> Option<Attr> {
        Attr::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Access mode for filesystem-like frontends: read/write for owner and
    /// group, read-only for others.
    pub fn mode(self) -> u32 {
        0o664
    }
}

/// Cheap cloneable handle to the attributes of one
/// [`VirtualTablet`](crate::tablet::VirtualTablet).
///
/// Each read or write holds the device lock for the whole
/// read-modify-notify sequence, so concurrent callers are serialized.
#[derive(Clone)]
pub struct ControlSurface {
    inner: Arc<Mutex<Inner>>,
}

impl ControlSurface {
    pub(crate) fn new(inner: Arc<Mutex<Inner>>) -> Self {
        Self { inner }
    }

    /// Current value of `attr` as a decimal string.
    pub fn read(&self, attr: Attr) -> String {
        let inner = lock(&self.inner);
        let bounds = inner.state.bounds();
        let (x, y) = inner.state.position();

        let value = match attr {
            Attr::Maxx => bounds.maxx,
            Attr::Maxy => bounds.maxy,
            Attr::Minx => bounds.minx,
            Attr::Miny => bounds.miny,
            Attr::X => x,
            Attr::Y => y,
        };
        value.to_string()
    }

    /// Writes a decimal string to `attr`.
    ///
    /// A bounds attribute re-asserts all four bounds with the one new
    /// value substituted in; `x`/`y` carry the other axis's current value
    /// through the combined clamp-and-notify operation. Either way the
    /// sink sees a single notification.
    ///
    /// Text that does not parse as an integer leaves everything unchanged;
    /// the caller cannot tell that apart from a successful write.
    pub fn write(&self, attr: Attr, buf: &str) {
        if let Ok(value) = buf.trim().parse::<i32>() {
            let mut inner = lock(&self.inner);
            let mut bounds = inner.state.bounds();
            let (x, y) = inner.state.position();

            match attr {
                Attr::Maxx => {
                    bounds.maxx = value;
                    inner.set_bounds(bounds);
                }
                Attr::Maxy => {
                    bounds.maxy = value;
                    inner.set_bounds(bounds);
                }
                Attr::Minx => {
                    bounds.minx = value;
                    inner.set_bounds(bounds);
                }
                Attr::Miny => {
                    bounds.miny = value;
                    inner.set_bounds(bounds);
                }
                Attr::X => inner.set_position(value, y),
                Attr::Y => inner.set_position(x, value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabletConfig;
    use crate::sink::{RecordingSink, SinkEvent};
    use crate::tablet::VirtualTablet;

    fn tablet() -> (VirtualTablet, RecordingSink) {
        let sink = RecordingSink::new();
        let tablet = VirtualTablet::new(TabletConfig::default(), Box::new(sink.clone()));
        sink.take(); // discard the initialization handshake
        (tablet, sink)
    }

    #[test]
    fn names_and_modes() {
        let names: Vec<_> = Attr::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["maxx", "maxy", "minx", "miny", "x", "y"]);
        for attr in Attr::ALL {
            assert_eq!(attr.mode(), 0o664);
            assert_eq!(Attr::from_name(attr.name()), Some(attr));
        }
        assert_eq!(Attr::from_name("pressure"), None);
    }

    #[test]
    fn read_formats_decimal() {
        let (tablet, _sink) = tablet();
        let surface = tablet.surface();

        assert_eq!(surface.read(Attr::Maxx), "4096");
        assert_eq!(surface.read(Attr::Minx), "0");
        assert_eq!(surface.read(Attr::X), "0");
    }

    #[test]
    fn write_x_preserves_y() {
        let (tablet, _sink) = tablet();
        let surface = tablet.surface();

        surface.write(Attr::Y, "300");
        surface.write(Attr::X, "5000");

        assert_eq!(tablet.position(), (4096, 300));
    }

    #[test]
    fn write_y_preserves_x() {
        let (tablet, _sink) = tablet();
        let surface = tablet.surface();

        surface.write(Attr::X, "123");
        surface.write(Attr::Y, "-7");

        assert_eq!(tablet.position(), (123, 0));
    }

    #[test]
    fn write_bound_keeps_other_bounds() {
        let (tablet, sink) = tablet();
        let surface = tablet.surface();

        surface.write(Attr::Maxx, "2000");

        assert_eq!(
            sink.take(),
            vec![
                SinkEvent::AxesConfigured {
                    min_x: 0,
                    max_x: 2000,
                    min_y: 0,
                    max_y: 4096,
                },
                SinkEvent::Synced,
            ]
        );
    }

    #[test]
    fn write_trims_surrounding_whitespace() {
        let (tablet, _sink) = tablet();
        let surface = tablet.surface();

        surface.write(Attr::X, " 42\n");
        assert_eq!(surface.read(Attr::X), "42");
    }

    #[test]
    fn garbage_write_is_a_silent_no_op() {
        let (tablet, sink) = tablet();
        let surface = tablet.surface();

        let before: Vec<_> = Attr::ALL.iter().map(|&a| surface.read(a)).collect();
        for attr in Attr::ALL {
            surface.write(attr, "not-a-number");
            surface.write(attr, "");
            surface.write(attr, "12.5");
        }
        let after: Vec<_> = Attr::ALL.iter().map(|&a| surface.read(a)).collect();

        assert_eq!(before, after);
        assert_eq!(sink.take(), vec![]);
    }

    #[test]
    fn rewriting_the_current_value_notifies_once() {
        let (tablet, sink) = tablet();
        let surface = tablet.surface();

        surface.write(Attr::X, "0");
        assert_eq!(sink.sync_count(), 1);
        assert_eq!(tablet.position(), (0, 0));
    }
}
