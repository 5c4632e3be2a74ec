//! Startup configuration and device identity.
//!
//! Everything defaults to the reference device, so an empty TOML document
//! (or `TabletConfig::default()`) yields a "VirtualTablet" with a
//! `[0, 4096]` range on both axes.
//!
//! ```toml
//! [meta]
//! name = "DrawingPad"
//!
//! [bounds]
//! maxx = 8192
//! maxy = 8192
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::state::Bounds;

/// Identity advertised for the emulated device.
///
/// Backends forwarding events to a host input subsystem can use these to
/// register the device; this crate only logs them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletMeta {
    /// Human-readable device name.
    pub name: String,
    /// Physical topology hint (opaque to this crate).
    pub phys: String,
    /// Vendor id.
    pub vendor: u16,
    /// Product id.
    pub product: u16,
    /// Device version.
    pub version: u16,
}

impl Default for TabletMeta {
    fn default() -> Self {
        Self {
            name: "VirtualTablet".to_string(),
            phys: "vtablet/input0".to_string(),
            vendor: 0x1234,
            product: 0x5678,
            version: 1,
        }
    }
}

/// Startup configuration for a
/// [`VirtualTablet`](crate::tablet::VirtualTablet).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletConfig {
    pub meta: TabletMeta,
    pub bounds: Bounds,
}

impl TabletConfig {
    /// Parses a TOML document; missing keys fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
