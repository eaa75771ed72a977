//! Virtual terminal switch coordination.
//!
//! The kernel runs process-directed switching: it raises a signal when
//! another terminal wants the display, and again when the display comes
//! back. Both directions share one signal; which one fired is decided
//! by when the pending flag is observed. A flag seen while the surface
//! is being torn down is a release request, one seen while it is being
//! brought up is the acquisition notice.

use crate::dev::ioctl::{ioctl_int, ioctl_mut, ioctl_ref};
use crate::dev::wsio::{
    VtMode, VT_ACKACQ, VT_ACTIVATE, VT_GETACTIVE, VT_PROCESS, VT_RELDISP, VT_SETMODE, VT_TRUE,
    WSDISPLAYIO_MODE_EMUL,
};
use crate::error::{DriverError, Result};
use crate::fb::device::FbDevice;
use crate::input::keysyms::{Keysym, KS_F1, KS_F12};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::os::unix::io::{AsRawFd, RawFd};
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the signal handler when the kernel requests or completes a
/// terminal switch. Signal handlers cannot carry context, so this is
/// process-global; one coordinator per process.
static SWITCH_PENDING: AtomicBool = AtomicBool::new(false);

extern "C" fn vt_switch_handler(_sig: libc::c_int) {
    SWITCH_PENDING.store(true, Ordering::SeqCst);
}

fn take_pending() -> bool {
    SWITCH_PENDING.swap(false, Ordering::SeqCst)
}

/// Terminal number a switch keysym selects, if any.
pub fn vt_for_keysym(sym: Keysym) -> Option<libc::c_int> {
    if (KS_F1..=KS_F12).contains(&sym) {
        Some((sym - KS_F1 + 1) as libc::c_int)
    } else {
        None
    }
}

pub struct VtSwitcher {
    console: File,
    path: String,
    active_vt: libc::c_int,
    handler_installed: bool,
}

impl VtSwitcher {
    /// Open the console device the switch ioctls are issued against.
    pub fn new(path: &str) -> Result<Self> {
        let console = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| DriverError::Open {
                path: path.to_string(),
                source: e,
            })?;
        Ok(Self {
            console,
            path: path.to_string(),
            active_vt: 0,
            handler_installed: false,
        })
    }

    fn fd(&self) -> RawFd {
        self.console.as_raw_fd()
    }

    /// Terminal that was active when switching was first enabled.
    pub fn active_vt(&self) -> libc::c_int {
        self.active_vt
    }

    /// Whether the kernel has signalled a switch since the last
    /// enable/disable. Hosts poll this from the event loop.
    pub fn switch_pending(&self) -> bool {
        SWITCH_PENDING.load(Ordering::SeqCst)
    }

    /// Called when the surface comes up. On first use, installs the
    /// switch handler and puts the console into process-directed mode.
    /// A pending flag here is the acquisition notice and is acknowledged.
    pub fn enable(&mut self) -> Result<()> {
        if take_pending() {
            debug!("{}: acknowledging terminal acquisition", self.path);
            ioctl_int(self.fd(), VT_RELDISP, VT_ACKACQ, "VT_RELDISP")?;
        }
        if !self.handler_installed {
            unsafe {
                libc::signal(libc::SIGUSR1, vt_switch_handler as libc::sighandler_t);
            }
            let mode = VtMode {
                mode: VT_PROCESS,
                waitv: 0,
                relsig: libc::SIGUSR1 as libc::c_short,
                acqsig: libc::SIGUSR1 as libc::c_short,
                frsig: 0,
            };
            ioctl_ref(self.fd(), VT_SETMODE, &mode, "VT_SETMODE")?;
            let mut active: libc::c_int = 0;
            ioctl_mut(self.fd(), VT_GETACTIVE, &mut active, "VT_GETACTIVE")?;
            self.active_vt = active;
            self.handler_installed = true;
            debug!("{}: switching enabled, active terminal {}", self.path, active);
        }
        Ok(())
    }

    /// Called when the surface goes down. A pending flag here is a
    /// release request: the framebuffer goes back to text emulation
    /// before the release is granted.
    pub fn disable(&mut self, fb: &FbDevice) -> Result<()> {
        if take_pending() {
            debug!("{}: releasing terminal", self.path);
            fb.set_mode(WSDISPLAYIO_MODE_EMUL)?;
            ioctl_int(self.fd(), VT_RELDISP, VT_TRUE, "VT_RELDISP")?;
        }
        Ok(())
    }

    /// Handle a terminal-switch keysym. Returns true when the keysym was
    /// a switch key, whether or not a switch actually happens; switching
    /// to the already-active terminal is a no-op.
    pub fn special_key(&mut self, sym: Keysym) -> Result<bool> {
        let Some(vt) = vt_for_keysym(sym) else {
            return Ok(false);
        };
        let mut active: libc::c_int = 0;
        ioctl_mut(self.fd(), VT_GETACTIVE, &mut active, "VT_GETACTIVE")?;
        if active == vt {
            return Ok(true);
        }
        // Arm the release before asking for the switch; the kernel's
        // signal can arrive before VT_ACTIVATE returns.
        SWITCH_PENDING.store(true, Ordering::SeqCst);
        if let Err(e) = ioctl_int(self.fd(), VT_ACTIVATE, vt, "VT_ACTIVATE") {
            SWITCH_PENDING.store(false, Ordering::SeqCst);
            warn!("{}: cannot activate terminal {}: {}", self.path, vt, e);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keysyms::*;

    #[test]
    fn function_keys_select_terminals() {
        assert_eq!(vt_for_keysym(KS_F1), Some(1));
        assert_eq!(vt_for_keysym(KS_F5), Some(5));
        assert_eq!(vt_for_keysym(KS_F12), Some(12));
    }

    #[test]
    fn other_keysyms_are_ignored() {
        assert_eq!(vt_for_keysym(KS_F13), None);
        assert_eq!(vt_for_keysym(KS_A), None);
        assert_eq!(vt_for_keysym(KS_ESCAPE), None);
        assert_eq!(vt_for_keysym(KS_NONE), None);
    }
}
