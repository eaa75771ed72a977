//! Driver error taxonomy.
//!
//! Initialization failures in the keyboard or pointer translators degrade
//! that input source to absent; a framebuffer failure is fatal to the
//! driver, since no output surface exists without it. Empty non-blocking
//! reads are not errors and never surface here.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Device path missing or inaccessible.
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A device-control call failed. The enclosing operation fails and is
    /// reported; there is no automatic retry.
    #[error("{op} failed: {source}")]
    Ioctl {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// mmap of the framebuffer region failed.
    #[error("cannot map framebuffer: {source}")]
    Map {
        #[source]
        source: io::Error,
    },

    /// The device reports a pixel depth no visual class can serve.
    #[error("unsupported framebuffer depth: {0} bpp")]
    UnsupportedDepth(u32),

    /// The kernel reports a keyboard hardware family we have no scancode
    /// table for. Keyboard input becomes unavailable; the rest of the
    /// driver is unaffected.
    #[error("unknown keyboard type {0}")]
    UnknownKeyboardType(u32),
}
