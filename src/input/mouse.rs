//! wsmouse pointer translator.
//!
//! Several pointer devices feed one logical pointer. Each device runs a
//! small health machine: it starts out under test, is promoted to
//! working on the first complete record, and is taken out of service
//! when a read fails outright. A broken device stays broken until the
//! pointer is reinitialized.

use crate::dev::wsio::*;
use crate::error::{DriverError, Result};
use crate::events::{ButtonMask, EventSink};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::io;
use std::mem::size_of;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};

/// Devices probed when the configuration names none.
pub const DEFAULT_POINTER_DEVICES: &[&str] = &["/dev/wsmouse"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerStage {
    /// Read failed; out of service until reinitialization.
    Broken,
    /// Opened but no complete record seen yet.
    Testing,
    Working,
}

/// Decoder state for one pointer device, separable from the descriptor
/// for testing.
#[derive(Debug, Clone)]
pub struct PointerState {
    stage: PointerStage,
    buttons: ButtonMask,
}

/// Button number from a kernel button event value. The kernel counts
/// from zero; logical buttons from one.
fn button_for(value: libc::c_int) -> Option<ButtonMask> {
    match value {
        0 => Some(ButtonMask::BUTTON_1),
        1 => Some(ButtonMask::BUTTON_2),
        2 => Some(ButtonMask::BUTTON_3),
        _ => None,
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            stage: PointerStage::Testing,
            buttons: ButtonMask::empty(),
        }
    }

    pub fn stage(&self) -> PointerStage {
        self.stage
    }

    pub fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    /// Decode one complete record. The device is promoted to working on
    /// the first record; a broken device ignores everything. Vertical
    /// motion is sign-inverted: the kernel's axis grows upward, the
    /// logical axis downward. Returns the number of events emitted.
    pub fn record(&mut self, ev: &WsconsEvent, sink: &mut dyn EventSink) -> usize {
        if self.stage == PointerStage::Broken {
            return 0;
        }
        self.stage = PointerStage::Working;

        let (mut dx, mut dy) = (0, 0);
        match ev.kind {
            WSCONS_EVENT_MOUSE_DELTA_X => dx = ev.value,
            WSCONS_EVENT_MOUSE_DELTA_Y => dy = -ev.value,
            WSCONS_EVENT_MOUSE_DOWN => {
                if let Some(b) = button_for(ev.value) {
                    self.buttons.insert(b);
                }
            }
            WSCONS_EVENT_MOUSE_UP => {
                if let Some(b) = button_for(ev.value) {
                    self.buttons.remove(b);
                }
            }
            _ => return 0,
        }
        sink.mouse(self.buttons, dx, dy);
        1
    }

    /// Take the device out of service.
    pub fn fail(&mut self) {
        self.stage = PointerStage::Broken;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

const RECORD_LEN: usize = size_of::<WsconsEvent>();

struct PointerDevice {
    path: String,
    file: File,
    state: PointerState,
    /// Head of a record whose tail has not arrived yet. Completed on the
    /// next readiness notification instead of spinning on the descriptor.
    partial: [u8; RECORD_LEN],
    partial_len: usize,
}

/// The logical pointer: every open device merged into one button mask
/// and motion stream per device record.
pub struct Pointer {
    devices: Vec<PointerDevice>,
}

fn open_device(path: &str) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .map_err(|e| DriverError::Open {
            path: path.to_string(),
            source: e,
        })
}

impl Pointer {
    /// Open the configured pointer devices, or the default set when none
    /// are configured. A device that fails to open is skipped with a
    /// warning; a pointer with zero devices is valid and silent.
    pub fn open(paths: &[String]) -> Self {
        let defaults: Vec<String> = DEFAULT_POINTER_DEVICES
            .iter()
            .map(|s| s.to_string())
            .collect();
        let paths = if paths.is_empty() { &defaults } else { paths };

        let mut devices = Vec::new();
        for path in paths {
            match open_device(path) {
                Ok(file) => {
                    debug!("{}: pointer device opened", path);
                    devices.push(PointerDevice {
                        path: path.clone(),
                        file,
                        state: PointerState::new(),
                        partial: [0; RECORD_LEN],
                        partial_len: 0,
                    });
                }
                Err(e) => warn!("skipping pointer device: {}", e),
            }
        }
        Pointer { devices }
    }

    /// Descriptors to poll for readability.
    pub fn fds(&self) -> Vec<RawFd> {
        self.devices.iter().map(|d| d.file.as_raw_fd()).collect()
    }

    /// Drain complete records from one readable descriptor into the
    /// sink. An empty or would-block read returns immediately with no
    /// data; the head of a record split across reads is kept on the
    /// device and completed on the next call. A hard read error breaks
    /// the device. Returns the number of events emitted.
    pub fn read(&mut self, fd: RawFd, sink: &mut dyn EventSink) -> usize {
        let Some(dev) = self
            .devices
            .iter_mut()
            .find(|d| d.file.as_raw_fd() == fd)
        else {
            return 0;
        };

        let mut emitted = 0;
        loop {
            let mut buf = [0u8; RECORD_LEN];
            let mut got = dev.partial_len;
            buf[..got].copy_from_slice(&dev.partial[..got]);
            dev.partial_len = 0;

            let complete = loop {
                let n = unsafe {
                    libc::read(
                        fd,
                        buf[got..].as_mut_ptr() as *mut libc::c_void,
                        buf.len() - got,
                    )
                };
                if n > 0 {
                    got += n as usize;
                    if got == buf.len() {
                        break true;
                    }
                    // partial record; try once more for the remainder
                } else if n == 0 {
                    break false;
                } else {
                    let err = io::Error::last_os_error();
                    if err.kind() == io::ErrorKind::WouldBlock {
                        break false;
                    }
                    warn!("{}: pointer read failed: {}", dev.path, err);
                    dev.state.fail();
                    got = 0;
                    break false;
                }
            };
            if !complete {
                // keep the record head for the next readiness callback
                dev.partial[..got].copy_from_slice(&buf[..got]);
                dev.partial_len = got;
                break;
            }
            // the buffer holds exactly one kernel record
            let ev = unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const WsconsEvent) };
            emitted += dev.state.record(&ev, sink);
        }
        emitted
    }

    /// Close every device. Reopen with [`Pointer::open`]; this also
    /// resets the per-device health machines.
    pub fn fini(&mut self) {
        self.devices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventQueue, InputEvent};

    #[test]
    fn first_record_promotes_to_working() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        assert_eq!(state.stage(), PointerStage::Testing);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_X, 3), &mut q);
        assert_eq!(state.stage(), PointerStage::Working);
        assert_eq!(
            q.events(),
            &[InputEvent::Mouse {
                buttons: ButtonMask::empty(),
                dx: 3,
                dy: 0
            }]
        );
    }

    #[test]
    fn broken_is_terminal() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        state.fail();
        assert_eq!(state.stage(), PointerStage::Broken);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_X, 3), &mut q);
        assert_eq!(state.stage(), PointerStage::Broken);
        assert!(q.is_empty());
    }

    #[test]
    fn vertical_motion_is_inverted() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_Y, 5), &mut q);
        assert_eq!(
            q.events(),
            &[InputEvent::Mouse {
                buttons: ButtonMask::empty(),
                dx: 0,
                dy: -5
            }]
        );
    }

    #[test]
    fn button_mask_accumulates() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DOWN, 0), &mut q);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DOWN, 1), &mut q);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_UP, 0), &mut q);
        assert_eq!(state.buttons(), ButtonMask::BUTTON_2);
        let last = *q.events().last().unwrap();
        assert_eq!(
            last,
            InputEvent::Mouse {
                buttons: ButtonMask::BUTTON_2,
                dx: 0,
                dy: 0
            }
        );
    }

    #[test]
    fn duplicate_button_down_is_idempotent() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DOWN, 2), &mut q);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DOWN, 2), &mut q);
        assert_eq!(state.buttons(), ButtonMask::BUTTON_3);
        state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_UP, 2), &mut q);
        assert_eq!(state.buttons(), ButtonMask::empty());
    }

    #[test]
    fn partial_record_returns_and_resumes() {
        use std::os::unix::io::FromRawFd;

        let mut fds = [0 as libc::c_int; 2];
        assert_eq!(unsafe { libc::pipe2(fds.as_mut_ptr(), libc::O_NONBLOCK) }, 0);
        let (rfd, wfd) = (fds[0], fds[1]);
        let mut pointer = Pointer {
            devices: vec![PointerDevice {
                path: "pipe".to_string(),
                file: unsafe { File::from_raw_fd(rfd) },
                state: PointerState::new(),
                partial: [0; RECORD_LEN],
                partial_len: 0,
            }],
        };
        let ev = WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_X, 7);
        let bytes = unsafe {
            std::slice::from_raw_parts(&ev as *const WsconsEvent as *const u8, RECORD_LEN)
        };
        let mut q = EventQueue::new();

        // half a record in the pipe: the read must come back at once,
        // empty-handed
        let n = unsafe { libc::write(wfd, bytes.as_ptr() as *const libc::c_void, 4) };
        assert_eq!(n, 4);
        assert_eq!(pointer.read(rfd, &mut q), 0);
        assert!(q.is_empty());

        // the remainder arrives; the stashed head completes the record
        let n = unsafe {
            libc::write(
                wfd,
                bytes[4..].as_ptr() as *const libc::c_void,
                RECORD_LEN - 4,
            )
        };
        assert_eq!(n as usize, RECORD_LEN - 4);
        assert_eq!(pointer.read(rfd, &mut q), 1);
        assert_eq!(
            q.events(),
            &[InputEvent::Mouse {
                buttons: ButtonMask::empty(),
                dx: 7,
                dy: 0
            }]
        );
        unsafe { libc::close(wfd) };
    }

    #[test]
    fn unknown_records_emit_nothing() {
        let mut state = PointerState::new();
        let mut q = EventQueue::new();
        let n = state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_Z, 1), &mut q);
        assert_eq!(n, 0);
        assert!(q.is_empty());
    }
}
