//! wskbd keyboard translator.
//!
//! Owns one keyboard device, switched into the structured-event
//! protocol while enabled. Raw kernel scancodes pass through to the
//! sink untranslated; symbol lookup happens against the keymap built
//! for the device's hardware family.

use crate::dev::ioctl::{ioctl_mut, ioctl_ref};
use crate::dev::wsio::*;
use crate::error::{DriverError, Result};
use crate::events::{EventSink, KEY_PRESS, KEY_RELEASE};
use crate::input::keymap::Keymap;
use crate::input::keymaps::KeyboardFamily;
use log::{debug, warn};
use nix::sys::termios::{
    cfsetispeed, cfsetospeed, tcgetattr, tcsetattr, BaudRate, ControlFlags, InputFlags,
    LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices, Termios,
};
use std::fs::{File, OpenOptions};
use std::io;
use std::mem::size_of;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};

/// Events decoded per read call.
const EVENT_BATCH: usize = 64;

pub struct Keyboard {
    path: String,
    file: Option<File>,
    family: KeyboardFamily,
    keymap: Keymap,
    saved_termios: Option<Termios>,
}

fn open_device(path: &str) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .map_err(|e| DriverError::Open {
            path: path.to_string(),
            source: e,
        })
}

fn not_open(path: &str) -> DriverError {
    DriverError::Open {
        path: path.to_string(),
        source: io::Error::new(io::ErrorKind::NotConnected, "device not open"),
    }
}

fn termios_err(op: &'static str, e: nix::Error) -> DriverError {
    DriverError::Ioctl {
        op,
        source: io::Error::from_raw_os_error(e as i32),
    }
}

/// Translate a batch of kernel event records into sink calls. Key
/// transitions pass through; everything else on a keyboard descriptor
/// is dropped.
fn decode_events(events: &[WsconsEvent], sink: &mut dyn EventSink) -> usize {
    let mut emitted = 0;
    for ev in events {
        match ev.kind {
            WSCONS_EVENT_KEY_DOWN => {
                sink.key(ev.value as u32, KEY_PRESS);
                emitted += 1;
            }
            WSCONS_EVENT_KEY_UP => {
                sink.key(ev.value as u32, KEY_RELEASE);
                emitted += 1;
            }
            _ => {}
        }
    }
    emitted
}

impl Keyboard {
    /// Open a keyboard device and build the keymap for its hardware
    /// family. Fails when the kernel reports a family we have no
    /// scancode table for.
    pub fn open(path: &str) -> Result<Self> {
        let file = open_device(path)?;
        let mut wstype: libc::c_uint = 0;
        ioctl_mut(file.as_raw_fd(), WSKBDIO_GTYPE, &mut wstype, "WSKBDIO_GTYPE")?;
        let family = KeyboardFamily::from_wskbd_type(wstype)?;
        let keymap = Keymap::from_table(family.table());
        debug!("{}: keyboard type {} ({:?})", path, wstype, family);
        Ok(Self {
            path: path.to_string(),
            file: Some(file),
            family,
            keymap,
            saved_termios: None,
        })
    }

    pub fn family(&self) -> KeyboardFamily {
        self.family
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn fd(&self) -> Option<RawFd> {
        self.file.as_ref().map(|f| f.as_raw_fd())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Put the device into the structured-event protocol and return the
    /// descriptor to poll. Reopens the device after a disable. The line
    /// discipline is restored if protocol negotiation fails.
    pub fn enable(&mut self) -> Result<RawFd> {
        if self.file.is_none() {
            self.file = Some(open_device(&self.path)?);
        }
        let file = match &self.file {
            Some(f) => f,
            None => return Err(not_open(&self.path)),
        };
        let fd = file.as_raw_fd();

        let saved = tcgetattr(file).map_err(|e| termios_err("tcgetattr", e))?;
        let mut tio = saved.clone();
        tio.input_flags = InputFlags::IGNPAR | InputFlags::IGNBRK;
        tio.output_flags = OutputFlags::empty();
        tio.local_flags = LocalFlags::empty();
        tio.control_flags = ControlFlags::CREAD | ControlFlags::CS8;
        tio.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        tio.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        cfsetispeed(&mut tio, BaudRate::B9600).map_err(|e| termios_err("cfsetispeed", e))?;
        cfsetospeed(&mut tio, BaudRate::B9600).map_err(|e| termios_err("cfsetospeed", e))?;
        tcsetattr(file, SetArg::TCSANOW, &tio).map_err(|e| termios_err("tcsetattr", e))?;

        if let Err(e) =
            ioctl_ref(fd, WSKBDIO_SETVERSION, &WSKBD_EVENT_VERSION, "WSKBDIO_SETVERSION")
        {
            if let Err(e2) = tcsetattr(file, SetArg::TCSANOW, &saved) {
                warn!("{}: line discipline restore failed: {}", self.path, e2);
            }
            return Err(e);
        }

        // Discard anything queued while the console owned the device.
        let mut junk = [0u8; 128];
        while unsafe { libc::read(fd, junk.as_mut_ptr() as *mut libc::c_void, junk.len()) } > 0 {}

        self.saved_termios = Some(saved);
        Ok(fd)
    }

    /// Hand the device back to the console: translated mode, original
    /// line discipline, descriptor closed. Failures are logged, not
    /// propagated; the console recovers on its own reopen.
    pub fn disable(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };
        let fd = file.as_raw_fd();
        if let Err(e) = ioctl_ref(fd, WSKBDIO_SETMODE, &WSKBD_TRANSLATED, "WSKBDIO_SETMODE") {
            warn!("{}: cannot restore translated mode: {}", self.path, e);
        }
        if let Some(saved) = self.saved_termios.take() {
            if let Err(e) = tcsetattr(&file, SetArg::TCSANOW, &saved) {
                warn!("{}: line discipline restore failed: {}", self.path, e);
            }
        }
    }

    /// Drain pending key events into the sink in one non-blocking read.
    /// Returns the number of events emitted; an empty read is 0.
    pub fn read(&mut self, sink: &mut dyn EventSink) -> usize {
        let Some(file) = &self.file else {
            return 0;
        };
        let fd = file.as_raw_fd();
        let mut buf = [WsconsEvent::new(0, 0); EVENT_BATCH];
        let n = unsafe {
            libc::read(
                fd,
                buf.as_mut_ptr() as *mut libc::c_void,
                EVENT_BATCH * size_of::<WsconsEvent>(),
            )
        };
        if n <= 0 {
            return 0;
        }
        let count = n as usize / size_of::<WsconsEvent>();
        decode_events(&buf[..count], sink)
    }

    /// Set the keyboard LEDs. Out-of-range bits are masked off; failure
    /// is invisible to the user and only logged.
    pub fn set_leds(&self, leds: libc::c_int) {
        let Some(fd) = self.fd() else { return };
        let masked = leds & 7;
        if let Err(e) = ioctl_ref(fd, WSKBDIO_SETLEDS, &masked, "WSKBDIO_SETLEDS") {
            debug!("{}: cannot set leds: {}", self.path, e);
        }
    }

    /// Ring the keyboard bell. Zero volume or pitch means silence and
    /// skips the device call entirely.
    pub fn bell(&self, volume: u32, pitch: u32, duration: u32) {
        if volume == 0 || pitch == 0 {
            return;
        }
        let Some(fd) = self.fd() else { return };
        let data = WskbdBellData {
            which: WSKBD_BELL_DOALL,
            pitch,
            period: duration,
            volume,
        };
        if let Err(e) = ioctl_ref(fd, WSKBDIO_COMPLEXBELL, &data, "WSKBDIO_COMPLEXBELL") {
            debug!("{}: bell failed: {}", self.path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventQueue, InputEvent};

    #[test]
    fn key_transitions_pass_through() {
        let events = [
            WsconsEvent::new(WSCONS_EVENT_KEY_DOWN, 30),
            WsconsEvent::new(WSCONS_EVENT_KEY_UP, 30),
        ];
        let mut q = EventQueue::new();
        assert_eq!(decode_events(&events, &mut q), 2);
        let got: Vec<_> = q.drain().collect();
        assert_eq!(
            got,
            vec![
                InputEvent::Key {
                    scancode: 30,
                    flags: KEY_PRESS
                },
                InputEvent::Key {
                    scancode: 30,
                    flags: KEY_RELEASE
                },
            ]
        );
    }

    #[test]
    fn non_key_records_are_dropped() {
        let events = [
            WsconsEvent::new(WSCONS_EVENT_ALL_KEYS_UP, 0),
            WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_X, 4),
            WsconsEvent::new(WSCONS_EVENT_KEY_DOWN, 1),
        ];
        let mut q = EventQueue::new();
        assert_eq!(decode_events(&events, &mut q), 1);
        assert_eq!(q.len(), 1);
    }
}
