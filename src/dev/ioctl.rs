//! Safe wrappers for ioctl system calls.
//!
//! Error-handling wrappers around the device-control calls issued by the
//! wsdisplay, wskbd and wsmouse handlers. Failures carry the operation
//! name so the enclosing component can report exactly what went wrong.

use crate::error::{DriverError, Result};
use std::os::unix::io::RawFd;

/// Execute an ioctl command with a mutable argument.
///
/// The caller must ensure the argument type matches what the ioctl
/// expects for this device.
pub fn ioctl_mut<T>(fd: RawFd, cmd: libc::c_ulong, arg: &mut T, op: &'static str) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd, arg as *mut T) };
    if ret < 0 {
        Err(DriverError::Ioctl {
            op,
            source: std::io::Error::last_os_error(),
        })
    } else {
        Ok(())
    }
}

/// Execute an ioctl command with a read-only argument.
pub fn ioctl_ref<T>(fd: RawFd, cmd: libc::c_ulong, arg: &T, op: &'static str) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd, arg as *const T) };
    if ret < 0 {
        Err(DriverError::Ioctl {
            op,
            source: std::io::Error::last_os_error(),
        })
    } else {
        Ok(())
    }
}

/// Execute an ioctl command whose argument is an integer passed by value.
pub fn ioctl_int(fd: RawFd, cmd: libc::c_ulong, arg: libc::c_int, op: &'static str) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd, arg) };
    if ret < 0 {
        Err(DriverError::Ioctl {
            op,
            source: std::io::Error::last_os_error(),
        })
    } else {
        Ok(())
    }
}
