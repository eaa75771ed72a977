//! wsdisplay device handle.
//!
//! Owns the opened framebuffer device, its memory mapping, and the
//! in-memory palette state the colormap synchronizer works against.
//! Created on driver attach, destroyed on detach; dropping the handle
//! restores the captured palette and returns the console to kernel
//! text emulation.

use crate::dev::ioctl::{ioctl_mut, ioctl_ref};
use crate::dev::wsio::*;
use crate::error::{DriverError, Result};
use log::{info, warn};
use memmap2::{MmapOptions, MmapRaw};
use std::fs::OpenOptions;
use std::os::unix::io::{AsRawFd, RawFd};

pub struct FbDevice {
    file: std::fs::File,
    path: String,
    map: MmapRaw,
    /// Byte offset from the mapping base to addressable pixel data. The
    /// kernel-reported buffer offset may not be page-aligned; the usable
    /// base is `map + (offset mod page_size)`.
    offset: usize,
    /// Legacy geometry block, refreshed by the surface manager.
    pub(crate) var: WsdisplayFbinfo,
    /// Extended framebuffer info, refreshed by the surface manager.
    pub(crate) info: WsdisplayioFbinfo,
    pub(crate) red: [u8; 256],
    pub(crate) green: [u8; 256],
    pub(crate) blue: [u8; 256],
    pub(crate) orig_red: [u8; 256],
    pub(crate) orig_green: [u8; 256],
    pub(crate) orig_blue: [u8; 256],
    /// Whether the original kernel palette has been captured for
    /// restoration at teardown.
    pub(crate) cmap_saved: bool,
    last_video: Option<libc::c_int>,
}

impl FbDevice {
    /// Open the framebuffer device, switch it into dumb-framebuffer mode
    /// and map the full reported buffer size.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| DriverError::Open {
                path: path.to_string(),
                source: e,
            })?;
        let fd = file.as_raw_fd();

        let mut info = WsdisplayioFbinfo::default();
        ioctl_mut(fd, WSDISPLAYIO_GET_FBINFO, &mut info, "WSDISPLAYIO_GET_FBINFO")?;

        // Kernel text emulation and a mapped surface fight over the same
        // memory; take exclusive pixel control before mapping.
        let mode = WSDISPLAYIO_MODE_DUMBFB;
        ioctl_ref(fd, WSDISPLAYIO_SMODE, &mode, "WSDISPLAYIO_SMODE")?;

        let map = MmapOptions::new()
            .len(info.fbi_fbsize as usize)
            .map_raw(&file)
            .map_err(|e| DriverError::Map { source: e })?;

        let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64;
        let offset = (info.fbi_fboffset % page) as usize;

        info!(
            "{}: {}x{} {}bpp, {} byte framebuffer, stride {}",
            path,
            info.fbi_width,
            info.fbi_height,
            info.fbi_bitsperpixel,
            info.fbi_fbsize,
            info.fbi_stride
        );

        Ok(Self {
            file,
            path: path.to_string(),
            map,
            offset,
            var: WsdisplayFbinfo::default(),
            info,
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
            orig_red: [0; 256],
            orig_green: [0; 256],
            orig_blue: [0; 256],
            cmap_saved: false,
            last_video: None,
        })
    }

    pub fn fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Device-reported pixel geometry (extended info).
    pub fn info(&self) -> &WsdisplayioFbinfo {
        &self.info
    }

    /// Switch between kernel emulation and dumb-framebuffer modes.
    pub fn set_mode(&self, mode: libc::c_int) -> Result<()> {
        ioctl_ref(self.fd(), WSDISPLAYIO_SMODE, &mode, "WSDISPLAYIO_SMODE")
    }

    /// Set the video power state, skipping the call when the state is
    /// already current.
    pub fn set_video(&mut self, on: bool) -> Result<()> {
        let value = if on {
            WSDISPLAYIO_VIDEO_ON
        } else {
            WSDISPLAYIO_VIDEO_OFF
        };
        if self.last_video == Some(value) {
            return Ok(());
        }
        ioctl_ref(self.fd(), WSDISPLAYIO_SVIDEO, &value, "WSDISPLAYIO_SVIDEO")?;
        self.last_video = Some(value);
        Ok(())
    }

    /// Length of the addressable pixel region in bytes.
    pub fn frame_len(&self) -> usize {
        self.info.fbi_fbsize as usize - self.offset
    }

    /// Mutable view of the addressable pixel memory.
    pub fn frame_mut(&mut self) -> &mut [u8] {
        // The mapping is private to this handle and lives as long as it
        // does; the offset stays inside the mapped region.
        unsafe {
            std::slice::from_raw_parts_mut(self.map.as_mut_ptr().add(self.offset), self.frame_len())
        }
    }
}

impl Drop for FbDevice {
    fn drop(&mut self) {
        // Leave the console's palette as we found it.
        if self.info.fbi_bitsperpixel <= 8 && self.cmap_saved {
            if let Err(e) = self.restore_original() {
                warn!("{}: palette restore failed: {}", self.path, e);
            }
        }
        if let Err(e) = self.set_mode(WSDISPLAYIO_MODE_EMUL) {
            warn!("{}: cannot return console to emulation mode: {}", self.path, e);
        }
    }
}
