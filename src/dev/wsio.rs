//! wscons ioctl numbers and parameter blocks.
//!
//! Fixed-layout `#[repr(C)]` mirrors of the kernel structures, with
//! request codes built the way the kernel builds them (group `'W'` for
//! wsdisplay/wskbd, group `'v'` for the USL terminal-switch compat set).

#![allow(dead_code)]

use std::mem::size_of;

// ioctl groups
const WS_IOC: u64 = b'W' as u64;
const VT_IOC: u64 = b'v' as u64;

// ---------------------------------------------------------------------------
// wskbd
// ---------------------------------------------------------------------------

pub const WSKBDIO_GTYPE: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 0, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSKBDIO_COMPLEXBELL: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 2, size_of::<WskbdBellData>()) as libc::c_ulong;
pub const WSKBDIO_SETLEDS: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 10, size_of::<libc::c_int>()) as libc::c_ulong;
pub const WSKBDIO_GETLEDS: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 11, size_of::<libc::c_int>()) as libc::c_ulong;
pub const WSKBDIO_SETMODE: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 19, size_of::<libc::c_int>()) as libc::c_ulong;
pub const WSKBDIO_GETMODE: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 20, size_of::<libc::c_int>()) as libc::c_ulong;
pub const WSKBDIO_SETVERSION: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 26, size_of::<libc::c_int>()) as libc::c_ulong;

/// Structured-event protocol version negotiated at enable time.
pub const WSKBD_EVENT_VERSION: libc::c_int = 1;

// WSKBDIO_SETMODE arguments
pub const WSKBD_TRANSLATED: libc::c_int = 0;
pub const WSKBD_RAW: libc::c_int = 1;

// wskbd_bell_data.which flags
pub const WSKBD_BELL_DOPITCH: libc::c_uint = 0x1;
pub const WSKBD_BELL_DOPERIOD: libc::c_uint = 0x2;
pub const WSKBD_BELL_DOVOLUME: libc::c_uint = 0x4;
pub const WSKBD_BELL_DOALL: libc::c_uint = 0x7;

/// Kernel-reported keyboard hardware family codes.
pub const WSKBD_TYPE_LK201: u32 = 1;
pub const WSKBD_TYPE_LK401: u32 = 2;
pub const WSKBD_TYPE_PC_XT: u32 = 3;
pub const WSKBD_TYPE_PC_AT: u32 = 4;
pub const WSKBD_TYPE_USB: u32 = 5;
pub const WSKBD_TYPE_NEXT: u32 = 6;
pub const WSKBD_TYPE_HPC_KBD: u32 = 7;
pub const WSKBD_TYPE_ADB: u32 = 8;
pub const WSKBD_TYPE_SUN: u32 = 9;
pub const WSKBD_TYPE_SUN5: u32 = 10;
pub const WSKBD_TYPE_HIL: u32 = 11;
pub const WSKBD_TYPE_AMIGA: u32 = 12;
pub const WSKBD_TYPE_MAPLE: u32 = 13;

/// Parameter block for WSKBDIO_COMPLEXBELL.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WskbdBellData {
    pub which: libc::c_uint,
    pub pitch: libc::c_uint,
    pub period: libc::c_uint,
    pub volume: libc::c_uint,
}

// ---------------------------------------------------------------------------
// wscons event stream
// ---------------------------------------------------------------------------

/// Fixed-size binary record delivered on keyboard and pointer
/// descriptors, in order, batched per read.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct WsconsEvent {
    pub kind: libc::c_uint,
    pub value: libc::c_int,
    pub time: libc::timespec,
}

impl WsconsEvent {
    /// Record with a zeroed timestamp; the translators never look at the
    /// kernel time field.
    pub fn new(kind: libc::c_uint, value: libc::c_int) -> Self {
        Self {
            kind,
            value,
            time: libc::timespec {
                tv_sec: 0,
                tv_nsec: 0,
            },
        }
    }
}

pub const WSCONS_EVENT_KEY_UP: libc::c_uint = 1;
pub const WSCONS_EVENT_KEY_DOWN: libc::c_uint = 2;
pub const WSCONS_EVENT_ALL_KEYS_UP: libc::c_uint = 3;
pub const WSCONS_EVENT_MOUSE_UP: libc::c_uint = 4;
pub const WSCONS_EVENT_MOUSE_DOWN: libc::c_uint = 5;
pub const WSCONS_EVENT_MOUSE_DELTA_X: libc::c_uint = 6;
pub const WSCONS_EVENT_MOUSE_DELTA_Y: libc::c_uint = 7;
pub const WSCONS_EVENT_MOUSE_DELTA_Z: libc::c_uint = 8;
pub const WSCONS_EVENT_MOUSE_ABSOLUTE_X: libc::c_uint = 9;
pub const WSCONS_EVENT_MOUSE_ABSOLUTE_Y: libc::c_uint = 10;

// ---------------------------------------------------------------------------
// wsdisplay
// ---------------------------------------------------------------------------

pub const WSDISPLAYIO_GTYPE: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 64, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSDISPLAYIO_GINFO: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 65, size_of::<WsdisplayFbinfo>()) as libc::c_ulong;
pub const WSDISPLAYIO_GETCMAP: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 66, size_of::<WsdisplayCmap>()) as libc::c_ulong;
pub const WSDISPLAYIO_PUTCMAP: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 67, size_of::<WsdisplayCmap>()) as libc::c_ulong;
pub const WSDISPLAYIO_GVIDEO: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 68, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSDISPLAYIO_SVIDEO: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 69, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSDISPLAYIO_GMODE: libc::c_ulong =
    nix::request_code_read!(WS_IOC, 77, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSDISPLAYIO_SMODE: libc::c_ulong =
    nix::request_code_write!(WS_IOC, 78, size_of::<libc::c_uint>()) as libc::c_ulong;
pub const WSDISPLAYIO_GET_FBINFO: libc::c_ulong =
    nix::request_code_readwrite!(WS_IOC, 104, size_of::<WsdisplayioFbinfo>()) as libc::c_ulong;

pub const WSDISPLAYIO_VIDEO_OFF: libc::c_int = 0;
pub const WSDISPLAYIO_VIDEO_ON: libc::c_int = 1;

/// Kernel text emulation draws over the framebuffer.
pub const WSDISPLAYIO_MODE_EMUL: libc::c_int = 0;
pub const WSDISPLAYIO_MODE_MAPPED: libc::c_int = 1;
/// Dumb framebuffer: the driver has exclusive pixel control.
pub const WSDISPLAYIO_MODE_DUMBFB: libc::c_int = 2;

/// Legacy geometry block (WSDISPLAYIO_GINFO).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WsdisplayFbinfo {
    pub height: u32,
    pub width: u32,
    pub depth: u32,
    pub cmsize: u32,
}

/// RGB channel descriptors inside the extended framebuffer info.
///
/// This is the largest variant of the kernel's subtype union; for
/// palettized surfaces `red_offset` aliases the colormap entry count.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WsdisplayioRgbmasks {
    pub red_offset: u32,
    pub red_size: u32,
    pub green_offset: u32,
    pub green_size: u32,
    pub blue_offset: u32,
    pub blue_size: u32,
    pub alpha_offset: u32,
    pub alpha_size: u32,
}

/// Extended framebuffer info (WSDISPLAYIO_GET_FBINFO).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WsdisplayioFbinfo {
    pub fbi_fbsize: u64,
    pub fbi_fboffset: u64,
    pub fbi_width: u32,
    pub fbi_height: u32,
    pub fbi_stride: u32,
    pub fbi_bitsperpixel: u32,
    pub fbi_pixeltype: u32,
    pub fbi_subtype: WsdisplayioRgbmasks,
    pub fbi_flags: u32,
}

/// Parameter block for GETCMAP/PUTCMAP. The pointers reference
/// caller-owned channel arrays of `count` bytes each.
#[repr(C)]
pub struct WsdisplayCmap {
    pub index: libc::c_uint,
    pub count: libc::c_uint,
    pub red: *mut u8,
    pub green: *mut u8,
    pub blue: *mut u8,
}

// ---------------------------------------------------------------------------
// USL terminal-switch compat set
// ---------------------------------------------------------------------------

pub const VT_OPENQRY: libc::c_ulong =
    nix::request_code_read!(VT_IOC, 1, size_of::<libc::c_int>()) as libc::c_ulong;
pub const VT_SETMODE: libc::c_ulong =
    nix::request_code_write!(VT_IOC, 2, size_of::<VtMode>()) as libc::c_ulong;
pub const VT_GETMODE: libc::c_ulong =
    nix::request_code_read!(VT_IOC, 3, size_of::<VtMode>()) as libc::c_ulong;
pub const VT_RELDISP: libc::c_ulong = nix::request_code_none!(VT_IOC, 4) as libc::c_ulong;
pub const VT_ACTIVATE: libc::c_ulong = nix::request_code_none!(VT_IOC, 5) as libc::c_ulong;
pub const VT_WAITACTIVE: libc::c_ulong = nix::request_code_none!(VT_IOC, 6) as libc::c_ulong;
pub const VT_GETACTIVE: libc::c_ulong =
    nix::request_code_read!(VT_IOC, 7, size_of::<libc::c_int>()) as libc::c_ulong;

// vt_mode.mode
pub const VT_AUTO: libc::c_char = 0;
/// Process-directed switching: the kernel asks, this process answers.
pub const VT_PROCESS: libc::c_char = 1;

// VT_RELDISP arguments
pub const VT_FALSE: libc::c_int = 0;
pub const VT_TRUE: libc::c_int = 1;
pub const VT_ACKACQ: libc::c_int = 2;

/// Parameter block for VT_SETMODE.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VtMode {
    pub mode: libc::c_char,
    pub waitv: libc::c_char,
    /// Signal sent when the kernel wants the terminal released
    pub relsig: libc::c_short,
    /// Signal sent when the terminal is handed back
    pub acqsig: libc::c_short,
    pub frsig: libc::c_short,
}
