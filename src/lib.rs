//! vtablet — virtual pointing/tablet device emulation.
//!
//! Emulates an absolute-pointing tablet: a 2D position inside configurable
//! axis bounds, exposed to operators as six textual read/write attributes
//! (`maxx`, `maxy`, `minx`, `miny`, `x`, `y`) and to the host input
//! subsystem as batched axis/position/sync notifications through the
//! [`EventSink`] trait.
//!
//! Positions are clamped into the bounds on every write; the reported
//! coordinates are always in range. Shrinking the bounds does not move an
//! already-stored position.
//!
//! ```
//! use vtablet::{Attr, RecordingSink, TabletConfig, VirtualTablet};
//!
//! let sink = RecordingSink::new();
//! let tablet = VirtualTablet::new(TabletConfig::default(), Box::new(sink.clone()));
//! let surface = tablet.surface();
//!
//! surface.write(Attr::X, "5000");
//! assert_eq!(surface.read(Attr::X), "4096"); // clamped to the default bounds
//! ```

pub mod attrs;
pub mod config;
pub mod error;
pub mod logger;
pub mod sink;
pub mod state;
pub mod tablet;

pub use attrs::*;
pub use config::*;
pub use error::*;
pub use logger::*;
pub use sink::*;
pub use state::*;
pub use tablet::*;
