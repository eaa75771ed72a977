//! Driver configuration.
//!
//! All options here are read-only inputs supplied by the host before
//! surface initialization. Loads from a TOML file when one is given;
//! every field has a working default.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Driver settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Framebuffer surface settings
    pub screen: ScreenOptions,
    /// Pointer device settings
    pub pointer: PointerOptions,
}

/// Framebuffer surface settings.
///
/// Width, height, depth and rate pin the requested geometry; zero means
/// "adopt whatever the device reports".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenOptions {
    /// wsdisplay device path
    pub device: String,
    /// Requested width in pixels (0 = device geometry)
    pub width: u32,
    /// Requested height in pixels (0 = device geometry)
    pub height: u32,
    /// Requested depth in bits per pixel. Advisory: the device-reported
    /// depth always takes precedence once the surface is configured
    pub depth: u32,
    /// Requested refresh rate in Hz (0 = default)
    pub rate: u32,
    /// Render to a grayscale palette
    pub gray: bool,
    /// Swap palette entries end-for-end (white-on-black consoles)
    pub reverse: bool,
    /// Treat the palette as immutable (static visual classes)
    pub static_cmap: bool,
    /// Load the apple-compatible default palette at enable time
    pub apple_cmap: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            device: "/dev/ttyE0".to_string(),
            width: 0,
            height: 0,
            depth: 0,
            rate: 0,
            gray: false,
            reverse: false,
            static_cmap: false,
            apple_cmap: false,
        }
    }
}

/// Pointer device settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerOptions {
    /// Pointer device paths; empty means probe the default devices
    pub devices: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("Cannot parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_geometry_unpinned() {
        let c = Config::default();
        assert_eq!(c.screen.device, "/dev/ttyE0");
        assert_eq!(c.screen.width, 0);
        assert_eq!(c.screen.depth, 0);
        assert!(c.pointer.devices.is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let c: Config = toml::from_str(
            r#"
            [screen]
            width = 1280
            height = 1024
            gray = true

            [pointer]
            devices = ["/dev/wsmouse0"]
            "#,
        )
        .unwrap();
        assert_eq!(c.screen.width, 1280);
        assert_eq!(c.screen.height, 1024);
        assert!(c.screen.gray);
        assert_eq!(c.screen.depth, 0);
        assert_eq!(c.pointer.devices, vec!["/dev/wsmouse0"]);
    }
}
