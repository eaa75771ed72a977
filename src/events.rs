//! Upward event API toward the windowing server's input subsystem.
//!
//! The keyboard and pointer translators decode device records and hand
//! them to an [`EventSink`]. Hosts either implement the trait directly or
//! collect into an [`EventQueue`] and drain it per event-loop turn.

use bitflags::bitflags;

bitflags! {
    /// Logical pointer buttons, accumulated across button-down/up events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonMask: u32 {
        const BUTTON_1 = 1 << 0;
        const BUTTON_2 = 1 << 1;
        const BUTTON_3 = 1 << 2;
    }
}

/// Key press flag, conventional raw-scancode encoding.
pub const KEY_PRESS: u8 = 0x00;
/// Key release flag.
pub const KEY_RELEASE: u8 = 0x80;

/// Receiver for decoded input events.
pub trait EventSink {
    /// A keyboard event: kernel scancode plus press/release flag
    /// ([`KEY_PRESS`] or [`KEY_RELEASE`]).
    fn key(&mut self, scancode: u32, flags: u8);

    /// A pointer event: current button mask and relative motion.
    fn mouse(&mut self, buttons: ButtonMask, dx: i32, dy: i32);
}

/// A decoded input event, as stored by [`EventQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { scancode: u32, flags: u8 },
    Mouse { buttons: ButtonMask, dx: i32, dy: i32 },
}

/// Vec-backed sink for hosts that drain events once per loop turn.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

impl EventSink for EventQueue {
    fn key(&mut self, scancode: u32, flags: u8) {
        self.events.push(InputEvent::Key { scancode, flags });
    }

    fn mouse(&mut self, buttons: ButtonMask, dx: i32, dy: i32) {
        self.events.push(InputEvent::Mouse { buttons, dx, dy });
    }
}
