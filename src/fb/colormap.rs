//! Colormap synchronization for palettized depths.
//!
//! Reads and writes the device palette in single contiguous ranges,
//! captures the original kernel palette for restoration at teardown,
//! and builds the default palettes (apple-compatible tables, grayscale
//! ramps, reversed variants).

use crate::dev::ioctl::ioctl_mut;
use crate::dev::wsio::{WsdisplayCmap, WSDISPLAYIO_GETCMAP, WSDISPLAYIO_PUTCMAP};
use crate::error::Result;
use crate::fb::device::FbDevice;
use crate::fb::palette::{APPLE4_CMAP, APPLE8_CMAP};

impl FbDevice {
    /// Capture the full original kernel palette once per device handle.
    fn save_original(&mut self) -> Result<()> {
        if self.cmap_saved {
            return Ok(());
        }
        let mut cmap = WsdisplayCmap {
            index: 0,
            count: 256,
            red: self.orig_red.as_mut_ptr(),
            green: self.orig_green.as_mut_ptr(),
            blue: self.orig_blue.as_mut_ptr(),
        };
        ioctl_mut(self.fd(), WSDISPLAYIO_GETCMAP, &mut cmap, "WSDISPLAYIO_GETCMAP")?;
        self.cmap_saved = true;
        Ok(())
    }

    /// Fetch palette slots `min..=max` from the device into the
    /// in-memory channel arrays with a single device read.
    pub fn read_colors(&mut self, min: usize, max: usize) -> Result<()> {
        self.save_original()?;
        let fd = self.fd();
        let mut cmap = WsdisplayCmap {
            index: min as libc::c_uint,
            count: (max - min + 1) as libc::c_uint,
            red: self.red[min..].as_mut_ptr(),
            green: self.green[min..].as_mut_ptr(),
            blue: self.blue[min..].as_mut_ptr(),
        };
        ioctl_mut(fd, WSDISPLAYIO_GETCMAP, &mut cmap, "WSDISPLAYIO_GETCMAP")
    }

    /// Push palette slots `min..=max` from the in-memory channel arrays
    /// to the device.
    pub fn write_colors(&mut self, min: usize, max: usize) -> Result<()> {
        self.save_original()?;
        let fd = self.fd();
        let mut cmap = WsdisplayCmap {
            index: min as libc::c_uint,
            count: (max - min + 1) as libc::c_uint,
            red: self.red[min..].as_mut_ptr(),
            green: self.green[min..].as_mut_ptr(),
            blue: self.blue[min..].as_mut_ptr(),
        };
        ioctl_mut(fd, WSDISPLAYIO_PUTCMAP, &mut cmap, "WSDISPLAYIO_PUTCMAP")
    }

    /// Write back the palette captured on first read. Teardown path for
    /// depths at or below 8.
    pub fn restore_original(&mut self) -> Result<()> {
        if !self.cmap_saved {
            return Ok(());
        }
        let fd = self.fd();
        let mut cmap = WsdisplayCmap {
            index: 0,
            count: 256,
            red: self.orig_red.as_mut_ptr(),
            green: self.orig_green.as_mut_ptr(),
            blue: self.orig_blue.as_mut_ptr(),
        };
        ioctl_mut(fd, WSDISPLAYIO_PUTCMAP, &mut cmap, "WSDISPLAYIO_PUTCMAP")
    }

    /// Load the default color palette for the given depth.
    ///
    /// With the apple-compatible flag the fixed tables are expanded
    /// (inverted for depth 8, matching the original console convention);
    /// otherwise the kernel's current palette is accepted as-is.
    pub fn default_colormap(&mut self, depth: u32, apple: bool) -> Result<()> {
        if !apple {
            // Accept the kernel colormap.
            return Ok(());
        }
        let last = if depth == 8 {
            for i in 0..256 {
                self.red[i] = 255 - APPLE8_CMAP[3 * i];
                self.green[i] = 255 - APPLE8_CMAP[3 * i + 1];
                self.blue[i] = 255 - APPLE8_CMAP[3 * i + 2];
            }
            255
        } else {
            for i in 0..16 {
                self.red[i] = APPLE4_CMAP[3 * i];
                self.green[i] = APPLE4_CMAP[3 * i + 1];
                self.blue[i] = APPLE4_CMAP[3 * i + 2];
            }
            15
        };
        self.write_colors(0, last)
    }

    /// Load a linear grayscale ramp of `2^depth` steps from white down
    /// to black.
    pub fn default_colormap_mono(&mut self, depth: u32) -> Result<()> {
        let n = 1usize << depth;
        gray_ramp(
            &mut self.red[..n],
            &mut self.green[..n],
            &mut self.blue[..n],
        );
        self.write_colors(0, n - 1)
    }

    /// Swap palette entry `i` with entry `n-1-i` across the populated
    /// range. Callers swap their notion of the black and white pixel
    /// indices alongside; see [`pixel_poles`].
    pub fn reverse_colors(&mut self, n: usize) {
        reverse_channels(
            &mut self.red[..n],
            &mut self.green[..n],
            &mut self.blue[..n],
        );
    }
}

/// Fill three channel slices with a white-to-black linear ramp.
pub fn gray_ramp(red: &mut [u8], green: &mut [u8], blue: &mut [u8]) {
    let n = red.len();
    for (slot, i) in (0..n).rev().enumerate() {
        let v = (i * 255 / (n - 1)) as u8;
        red[slot] = v;
        green[slot] = v;
        blue[slot] = v;
    }
}

/// Reverse three palette channel slices end-for-end.
pub fn reverse_channels(red: &mut [u8], green: &mut [u8], blue: &mut [u8]) {
    red.reverse();
    green.reverse();
    blue.reverse();
}

/// Nominal (black, white) pixel indices for an `n`-entry palette.
///
/// The unreversed convention puts black at the top of the range and
/// white at zero; reversal swaps the two.
pub fn pixel_poles(n: usize, reversed: bool) -> (usize, usize) {
    if reversed {
        (0, n - 1)
    } else {
        (n - 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_ramp_runs_white_to_black() {
        let mut r = [0u8; 4];
        let mut g = [0u8; 4];
        let mut b = [0u8; 4];
        gray_ramp(&mut r, &mut g, &mut b);
        assert_eq!(r, [255, 170, 85, 0]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn gray_ramp_monochrome() {
        let mut r = [0u8; 2];
        let mut g = [0u8; 2];
        let mut b = [0u8; 2];
        gray_ramp(&mut r, &mut g, &mut b);
        assert_eq!(r, [255, 0]);
    }

    #[test]
    fn reversal_is_an_involution() {
        let mut r: Vec<u8> = (0..=255).collect();
        let mut g: Vec<u8> = r.iter().map(|v| v.wrapping_mul(3)).collect();
        let mut b: Vec<u8> = r.iter().map(|v| v.wrapping_add(7)).collect();
        let (r0, g0, b0) = (r.clone(), g.clone(), b.clone());

        reverse_channels(&mut r, &mut g, &mut b);
        assert_ne!(r, r0);
        assert_eq!(r[0], 255);

        reverse_channels(&mut r, &mut g, &mut b);
        assert_eq!(r, r0);
        assert_eq!(g, g0);
        assert_eq!(b, b0);
    }

    #[test]
    fn pixel_poles_swap_under_reversal() {
        assert_eq!(pixel_poles(256, false), (255, 0));
        assert_eq!(pixel_poles(256, true), (0, 255));
        // reversing twice lands back on the original assignment
        let (black, white) = pixel_poles(256, false);
        let (rb, rw) = pixel_poles(256, true);
        assert_eq!((rb, rw), (white, black));
    }

    #[test]
    fn apple_tables_have_expected_shape() {
        assert_eq!(APPLE8_CMAP.len(), 256 * 3);
        assert_eq!(APPLE4_CMAP.len(), 16 * 3);
        // first entry is white, last is black in both tables
        assert_eq!(&APPLE8_CMAP[0..3], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(&APPLE8_CMAP[255 * 3..], &[0x00, 0x00, 0x00]);
        assert_eq!(&APPLE4_CMAP[0..3], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(&APPLE4_CMAP[15 * 3..], &[0x00, 0x00, 0x00]);
    }
}
