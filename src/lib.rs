//! Hardware-facing layer of a wscons display driver.
//!
//! Translates between the kernel's wsdisplay/wskbd/wsmouse interfaces
//! and a windowing server's notions of surfaces, keymaps and input
//! events: framebuffer probing and mapping, rotation via shadow
//! buffers, palette handling, keymap construction per keyboard family,
//! the keyboard and pointer event protocols, and virtual terminal
//! switch coordination.

pub mod config;
pub mod dev;
pub mod error;
pub mod events;
pub mod fb;
pub mod input;
pub mod vt;

pub use config::{Config, PointerOptions, ScreenOptions};
pub use error::{DriverError, Result};
pub use events::{ButtonMask, EventQueue, EventSink, InputEvent};
pub use fb::{FbDevice, Rotation, Surface, SurfaceConfig, VisualClass};
pub use input::{Keyboard, KeyboardFamily, Keymap, Pointer, PointerStage, PointerState};
pub use vt::VtSwitcher;
