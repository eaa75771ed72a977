//! Framebuffer surface management.
//!
//! Owns the mapped device memory, the live surface configuration, and
//! the shadow-buffer decision. Live reconfiguration is transactional: a
//! failure after unmapping restores the previous configuration and
//! remaps under it before reporting the error.

use crate::config::ScreenOptions;
use crate::dev::ioctl::ioctl_mut;
use crate::dev::wsio::{
    WsdisplayFbinfo, WsdisplayioFbinfo, WSDISPLAYIO_GET_FBINFO, WSDISPLAYIO_GINFO,
    WSDISPLAYIO_GTYPE, WSDISPLAYIO_MODE_DUMBFB, WSDISPLAYIO_MODE_EMUL,
};
use crate::error::{DriverError, Result};
use crate::fb::device::FbDevice;
use crate::fb::shadow::ShadowUpdate;
use bitflags::bitflags;
use log::{debug, info, warn};

/// Refresh rate adopted when the device reports none.
const DEFAULT_RATE: u32 = 103;

bitflags! {
    /// Surface rotation, optionally mirrored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rotation: u32 {
        const ROTATE_0 = 1 << 0;
        const ROTATE_90 = 1 << 1;
        const ROTATE_180 = 1 << 2;
        const ROTATE_270 = 1 << 3;
        const REFLECT_X = 1 << 4;
        const REFLECT_Y = 1 << 5;
    }
}

impl Rotation {
    /// Rotation angle in degrees, ignoring reflection.
    pub fn angle(self) -> u32 {
        if self.contains(Rotation::ROTATE_90) {
            90
        } else if self.contains(Rotation::ROTATE_180) {
            180
        } else if self.contains(Rotation::ROTATE_270) {
            270
        } else {
            0
        }
    }

    /// True when no rotation and no reflection applies; only then may
    /// the driver write straight into device memory.
    pub fn is_identity(self) -> bool {
        self == Rotation::ROTATE_0
    }

    /// True for odd multiples of 90 degrees, where logical width and
    /// height swap.
    pub fn is_portrait(self) -> bool {
        self.intersects(Rotation::ROTATE_90 | Rotation::ROTATE_270)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::ROTATE_0
    }
}

/// Visual class derived from bits-per-pixel and the palette flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualClass {
    StaticGray,
    GrayScale,
    StaticColor,
    PseudoColor,
    TrueColor,
}

/// Derive the visual class for a depth, or fail for depths no visual
/// can serve.
pub fn visual_for_depth(bits_per_pixel: u32, gray: bool, static_cmap: bool) -> Result<VisualClass> {
    match bits_per_pixel {
        32 | 24 | 16 => Ok(VisualClass::TrueColor),
        8 => Ok(match (gray, static_cmap) {
            (true, true) => VisualClass::StaticGray,
            (true, false) => VisualClass::GrayScale,
            (false, true) => VisualClass::StaticColor,
            (false, false) => VisualClass::PseudoColor,
        }),
        4 => Ok(if gray {
            VisualClass::StaticGray
        } else {
            VisualClass::StaticColor
        }),
        2 | 1 => Ok(VisualClass::StaticGray),
        other => Err(DriverError::UnsupportedDepth(other)),
    }
}

/// Channel mask from a device channel descriptor.
pub fn channel_mask(offset: u32, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    (((1u64 << size) - 1) << offset) as u32
}

/// Fill gaps below a channel mask so the three channel masks partition
/// the pixel word contiguously: absorb the bit immediately below the
/// mask's lowest set bit as long as no other channel claims it.
pub fn make_contiguous(orig: u32, others: u32) -> u32 {
    if orig == 0 {
        return 0;
    }
    let mut orig = orig;
    let mut low = lowbit(orig) >> 1;
    while low != 0 && (others & low) == 0 {
        orig |= low;
        low >>= 1;
    }
    orig
}

fn lowbit(x: u32) -> u32 {
    x & x.wrapping_neg()
}

/// A supported monitor timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub width: u32,
    pub height: u32,
    pub rate: u32,
}

/// Timings consulted when a pinned geometry does not match the device.
pub const TIMINGS: &[Timing] = &[
    Timing { width: 640, height: 480, rate: 60 },
    Timing { width: 800, height: 600, rate: 60 },
    Timing { width: 800, height: 600, rate: 75 },
    Timing { width: 1024, height: 768, rate: 60 },
    Timing { width: 1024, height: 768, rate: 75 },
    Timing { width: 1152, height: 864, rate: 75 },
    Timing { width: 1280, height: 800, rate: 60 },
    Timing { width: 1280, height: 1024, rate: 60 },
    Timing { width: 1366, height: 768, rate: 60 },
    Timing { width: 1440, height: 900, rate: 60 },
    Timing { width: 1600, height: 900, rate: 60 },
    Timing { width: 1680, height: 1050, rate: 60 },
    Timing { width: 1920, height: 1080, rate: 60 },
    Timing { width: 1920, height: 1200, rate: 60 },
];

/// Find the supported timing for a requested geometry: an exact match
/// when one exists, otherwise the closest supported area.
pub fn find_timing(width: u32, height: u32) -> &'static Timing {
    if let Some(t) = TIMINGS
        .iter()
        .find(|t| t.width == width && t.height == height)
    {
        return t;
    }
    let want = width as i64 * height as i64;
    TIMINGS
        .iter()
        .min_by_key(|t| (t.width as i64 * t.height as i64 - want).abs())
        .unwrap_or(&TIMINGS[0])
}

/// The live surface configuration. Mutated only by [`Surface::reconfigure`];
/// always consistent with the device geometry after any successful
/// reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub rotation: Rotation,
    /// True iff rotation is not the identity.
    pub shadow: bool,
    /// Logical width, swapped from physical when portrait.
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub bits_per_pixel: u32,
    /// Device row stride in bytes.
    pub stride: u32,
    pub rate: u32,
    pub visual: VisualClass,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
}

/// Logical dimensions for a physical geometry under a rotation.
pub fn logical_dims(rotation: Rotation, width: u32, height: u32) -> (u32, u32) {
    if rotation.is_portrait() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Physical dimensions to reconfigure against when the caller names
/// none: the device-reported pair when it is valid, otherwise the
/// current logical geometry un-swapped through the current rotation.
/// The device pair is zero when the geometry query failed at setup.
fn fallback_physical_dims(
    device: (u32, u32),
    rotation: Rotation,
    logical: (u32, u32),
) -> (u32, u32) {
    if device.0 != 0 && device.1 != 0 {
        device
    } else {
        logical_dims(rotation, logical.0, logical.1)
    }
}

/// Framebuffer surface manager.
pub struct Surface {
    device: FbDevice,
    options: ScreenOptions,
    config: SurfaceConfig,
    shadow_buf: Option<Vec<u8>>,
    shadow_stride: usize,
    update: Option<ShadowUpdate>,
    enabled: bool,
    reversed_once: bool,
}

impl Surface {
    /// Configure a surface over an opened device.
    ///
    /// Adopts device geometry and depth where the caller left them
    /// unpinned (with 1024x768 and 16bpp fallbacks when the device query
    /// fails); pinned geometry that mismatches the device goes through
    /// the timing lookup. The initial rotation is always the identity.
    pub fn new(mut device: FbDevice, options: &ScreenOptions) -> Result<Self> {
        let fd = device.fd();

        let mut probe = WsdisplayioFbinfo::default();
        let probed = ioctl_mut(fd, WSDISPLAYIO_GET_FBINFO, &mut probe, "WSDISPLAYIO_GET_FBINFO")
            .map_err(|e| warn!("framebuffer probe failed: {}", e))
            .is_ok();

        let (mut width, mut height, mut rate);
        if options.width == 0 || options.height == 0 {
            if probed {
                width = probe.fbi_width;
                height = probe.fbi_height;
            } else {
                width = 1024;
                height = 768;
            }
            rate = DEFAULT_RATE;
        } else {
            width = options.width;
            height = options.height;
            rate = if options.rate != 0 {
                options.rate
            } else {
                DEFAULT_RATE
            };
        }

        if width != probe.fbi_width || height != probe.fbi_height {
            let t = find_timing(width, height);
            debug!(
                "requested {}x{} not current, adopting timing {}x{}@{}",
                width, height, t.width, t.height, t.rate
            );
            width = t.width;
            height = t.height;
            rate = t.rate;
        }

        let mut wstype: libc::c_uint = 0;
        ioctl_mut(fd, WSDISPLAYIO_GTYPE, &mut wstype, "WSDISPLAYIO_GTYPE")?;
        debug!("wsdisplay type {}", wstype);

        // Re-query both info blocks; the parameters may have changed
        // since open.
        let mut info = WsdisplayioFbinfo::default();
        match ioctl_mut(fd, WSDISPLAYIO_GET_FBINFO, &mut info, "WSDISPLAYIO_GET_FBINFO") {
            Ok(()) => device.info = info,
            Err(e) => warn!("framebuffer re-query failed: {}", e),
        }
        let mut var = WsdisplayFbinfo::default();
        match ioctl_mut(fd, WSDISPLAYIO_GINFO, &mut var, "WSDISPLAYIO_GINFO") {
            Ok(()) => device.var = var,
            Err(e) => warn!("geometry query failed: {}", e),
        }

        let bpp = device.info.fbi_bitsperpixel;
        if device.info.fbi_stride == 0 {
            device.info.fbi_stride = (device.var.width * bpp + 7) / 8;
        }

        let visual = visual_for_depth(bpp, options.gray, options.static_cmap)?;

        let m = device.info.fbi_subtype;
        let mut red = channel_mask(m.red_offset, m.red_size);
        let mut green = channel_mask(m.green_offset, m.green_size);
        let mut blue = channel_mask(m.blue_offset, m.blue_size);
        // Fill in the gaps so downstream compositing sees a contiguous
        // partition of the pixel word.
        red = make_contiguous(red, green | blue);
        green = make_contiguous(green, red | blue);
        blue = make_contiguous(blue, red | green);

        let config = SurfaceConfig {
            rotation: Rotation::ROTATE_0,
            shadow: false,
            width,
            height,
            depth: bpp,
            bits_per_pixel: bpp,
            stride: device.info.fbi_stride,
            rate,
            visual,
            red_mask: red,
            green_mask: green,
            blue_mask: blue,
        };

        info!(
            "surface {}x{} {}bpp {:?} rate {} masks {:#x}/{:#x}/{:#x}",
            config.width, config.height, bpp, visual, rate, red, green, blue
        );

        let mut surface = Surface {
            device,
            options: options.clone(),
            config,
            shadow_buf: None,
            shadow_stride: 0,
            update: None,
            enabled: false,
            reversed_once: false,
        };
        surface.map_framebuffer()?;
        Ok(surface)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn device(&self) -> &FbDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut FbDevice {
        &mut self.device
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Establish the logical view over the mapped memory: direct when
    /// the rotation is the identity, a private shadow buffer otherwise.
    fn map_framebuffer(&mut self) -> Result<()> {
        self.config.shadow = !self.config.rotation.is_identity();
        if self.config.shadow {
            let stride =
                (self.config.width as usize * self.config.bits_per_pixel as usize + 7) / 8;
            self.shadow_buf = Some(vec![0; stride * self.config.height as usize]);
            self.shadow_stride = stride;
            self.update = Some(ShadowUpdate::select(
                self.config.rotation,
                self.config.bits_per_pixel,
            ));
        } else {
            let needed = self.device.info.fbi_stride as usize * self.config.height as usize;
            if needed > self.device.frame_len() {
                return Err(DriverError::Map {
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!(
                            "{} bytes needed, {} mapped",
                            needed,
                            self.device.frame_len()
                        ),
                    ),
                });
            }
            self.shadow_buf = None;
            self.shadow_stride = 0;
            self.update = None;
            self.config.stride = self.device.info.fbi_stride;
        }
        Ok(())
    }

    /// Release the logical view.
    fn unmap_framebuffer(&mut self) {
        self.shadow_buf = None;
        self.shadow_stride = 0;
        self.update = None;
    }

    /// Mutable view of the render target plus its row stride: the shadow
    /// buffer under rotation, device memory otherwise.
    pub fn frame_mut(&mut self) -> (&mut [u8], usize) {
        match &mut self.shadow_buf {
            Some(buf) => (buf.as_mut_slice(), self.shadow_stride),
            None => {
                let stride = self.device.info.fbi_stride as usize;
                (self.device.frame_mut(), stride)
            }
        }
    }

    /// Flush the shadow buffer through the rotation transform into
    /// device memory. No-op for direct surfaces.
    pub fn flush(&mut self) {
        let Some(update) = self.update else { return };
        let Some(buf) = &self.shadow_buf else { return };
        let fstride = self.device.info.fbi_stride as usize;
        let (rotation, bpp) = (self.config.rotation, self.config.bits_per_pixel);
        let (w, h) = (self.config.width, self.config.height);
        let sstride = self.shadow_stride;
        let fb = self.device.frame_mut();
        update.run(rotation, bpp, buf, sstride, fb, fstride, w, h);
    }

    /// Apply a new rotation, rate and size. The only mutator of live
    /// configuration; transactional with respect to visible state.
    pub fn reconfigure(
        &mut self,
        rotation: Rotation,
        rate: u32,
        size: Option<(u32, u32)>,
    ) -> Result<()> {
        let was_enabled = self.enabled;
        if was_enabled {
            self.disable()?;
        }

        let snapshot = self.config.clone();

        let (pw, ph) = size.unwrap_or_else(|| {
            fallback_physical_dims(
                (self.device.var.width, self.device.var.height),
                self.config.rotation,
                (self.config.width, self.config.height),
            )
        });
        let (width, height) = logical_dims(rotation, pw, ph);

        self.unmap_framebuffer();
        self.config.rotation = rotation;
        self.config.width = width;
        self.config.height = height;
        if rate != 0 {
            self.config.rate = rate;
        }

        if let Err(e) = self.map_framebuffer() {
            // Restore the snapshot and remap under the old configuration.
            warn!("reconfigure failed, rolling back: {}", e);
            self.unmap_framebuffer();
            self.config = snapshot;
            if let Err(e2) = self.map_framebuffer() {
                warn!("rollback remap failed: {}", e2);
            }
            if was_enabled {
                if let Err(e2) = self.enable() {
                    warn!("rollback re-enable failed: {}", e2);
                }
            }
            return Err(e);
        }

        info!(
            "reconfigured to {}x{} rotation {:?} (shadow: {})",
            self.config.width, self.config.height, self.config.rotation, self.config.shadow
        );

        if was_enabled {
            self.enable()?;
        }
        Ok(())
    }

    /// Take exclusive pixel control and load the default palette.
    pub fn enable(&mut self) -> Result<()> {
        self.device.set_mode(WSDISPLAYIO_MODE_DUMBFB)?;

        let bpp = self.config.bits_per_pixel;
        if bpp <= 8 {
            let built = if self.options.gray {
                self.device.default_colormap_mono(bpp)?;
                true
            } else {
                self.device.default_colormap(bpp, self.options.apple_cmap)?;
                self.options.apple_cmap
            };
            if self.options.reverse {
                let n = if !self.options.gray && self.options.apple_cmap && bpp < 8 {
                    16
                } else {
                    1usize << bpp
                };
                if built {
                    self.device.reverse_colors(n);
                    self.device.write_colors(0, n - 1)?;
                } else if !self.reversed_once {
                    // The kernel palette is reversed exactly once; it is
                    // not rebuilt on re-enable.
                    self.device.read_colors(0, n - 1)?;
                    self.device.reverse_colors(n);
                    self.device.write_colors(0, n - 1)?;
                    self.reversed_once = true;
                }
            }
        }

        self.enabled = true;
        Ok(())
    }

    /// Hand the device back to kernel text emulation.
    pub fn disable(&mut self) -> Result<()> {
        self.device.set_mode(WSDISPLAYIO_MODE_EMUL)?;
        self.enabled = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_classes_per_depth() {
        assert_eq!(
            visual_for_depth(32, false, false).unwrap(),
            VisualClass::TrueColor
        );
        assert_eq!(
            visual_for_depth(24, false, false).unwrap(),
            VisualClass::TrueColor
        );
        assert_eq!(
            visual_for_depth(16, true, true).unwrap(),
            VisualClass::TrueColor
        );
        assert_eq!(
            visual_for_depth(8, false, false).unwrap(),
            VisualClass::PseudoColor
        );
        assert_eq!(
            visual_for_depth(8, false, true).unwrap(),
            VisualClass::StaticColor
        );
        assert_eq!(
            visual_for_depth(8, true, false).unwrap(),
            VisualClass::GrayScale
        );
        assert_eq!(
            visual_for_depth(8, true, true).unwrap(),
            VisualClass::StaticGray
        );
        assert_eq!(
            visual_for_depth(4, false, false).unwrap(),
            VisualClass::StaticColor
        );
        assert_eq!(
            visual_for_depth(4, true, false).unwrap(),
            VisualClass::StaticGray
        );
        assert_eq!(
            visual_for_depth(2, false, false).unwrap(),
            VisualClass::StaticGray
        );
        assert_eq!(
            visual_for_depth(1, false, false).unwrap(),
            VisualClass::StaticGray
        );
        assert!(matches!(
            visual_for_depth(12, false, false),
            Err(DriverError::UnsupportedDepth(12))
        ));
    }

    #[test]
    fn channel_mask_from_descriptor() {
        assert_eq!(channel_mask(11, 5), 0xF800);
        assert_eq!(channel_mask(5, 6), 0x07E0);
        assert_eq!(channel_mask(0, 5), 0x001F);
        assert_eq!(channel_mask(0, 0), 0);
        assert_eq!(channel_mask(16, 8), 0x00FF_0000);
    }

    #[test]
    fn make_contiguous_fills_gaps() {
        // bits 6 and 4 set; bit 1 claimed by another channel
        assert_eq!(make_contiguous(0b101_0000, 0b11), 0b101_1100);
        // already contiguous masks are untouched
        assert_eq!(make_contiguous(0xF800, 0x07E0 | 0x001F), 0xF800);
        assert_eq!(make_contiguous(0, 0xFFFF), 0);
    }

    #[test]
    fn make_contiguous_is_idempotent() {
        for (orig, others) in [
            (0b101_0000u32, 0b11u32),
            (0xF800, 0x07FF),
            (0x00F0, 0x0003),
            (0x8000_0000, 0),
        ] {
            let once = make_contiguous(orig, others);
            assert_eq!(make_contiguous(once, others), once);
        }
    }

    #[test]
    fn make_contiguous_never_corrupts_other_channels() {
        let red = channel_mask(12, 4);
        let green = channel_mask(6, 4);
        let blue = channel_mask(0, 4);
        let fr = make_contiguous(red, green | blue);
        let fg = make_contiguous(green, fr | blue);
        let fb = make_contiguous(blue, fr | fg);
        assert_eq!(fr & (green | blue), 0);
        assert_eq!(fg & (fr | blue), 0);
        assert_eq!(fb & (fr | fg), 0);
        // the gap between red and green is absorbed into red
        assert_eq!(fr, 0xF000 | 0x0C00);
        // the filled masks tile the low word with no holes
        let union = fr | fg | fb;
        assert_eq!(union, 0xFFFF);
    }

    #[test]
    fn timing_lookup_prefers_exact_match() {
        let t = find_timing(1024, 768);
        assert_eq!((t.width, t.height, t.rate), (1024, 768, 60));
        let t = find_timing(1020, 760);
        assert_eq!((t.width, t.height), (1024, 768));
    }

    #[test]
    fn rotation_helpers() {
        assert!(Rotation::ROTATE_0.is_identity());
        assert!(!(Rotation::ROTATE_0 | Rotation::REFLECT_X).is_identity());
        assert!(Rotation::ROTATE_90.is_portrait());
        assert!(Rotation::ROTATE_270.is_portrait());
        assert!(!Rotation::ROTATE_180.is_portrait());
        assert_eq!(Rotation::ROTATE_270.angle(), 270);
    }

    #[test]
    fn logical_dims_swap_for_portrait() {
        assert_eq!(logical_dims(Rotation::ROTATE_0, 1024, 768), (1024, 768));
        assert_eq!(logical_dims(Rotation::ROTATE_90, 1024, 768), (768, 1024));
        assert_eq!(logical_dims(Rotation::ROTATE_180, 1024, 768), (1024, 768));
        assert_eq!(logical_dims(Rotation::ROTATE_270, 1024, 768), (768, 1024));
    }

    #[test]
    fn fallback_dims_survive_a_failed_geometry_query() {
        // device pair valid: it wins
        assert_eq!(
            fallback_physical_dims((1024, 768), Rotation::ROTATE_90, (768, 1024)),
            (1024, 768)
        );
        // device pair zeroed: recover the physical pair from the current
        // logical geometry, never 0x0
        assert_eq!(
            fallback_physical_dims((0, 0), Rotation::ROTATE_90, (768, 1024)),
            (1024, 768)
        );
        assert_eq!(
            fallback_physical_dims((0, 0), Rotation::ROTATE_0, (1280, 800)),
            (1280, 800)
        );
        assert_eq!(
            fallback_physical_dims((0, 768), Rotation::ROTATE_180, (1024, 768)),
            (1024, 768)
        );
    }

    #[test]
    fn reconfigure_round_trip_at_value_level() {
        // rotating to 90 and back restores the logical geometry
        let (w0, h0) = (1280, 1024);
        let (w1, h1) = logical_dims(Rotation::ROTATE_90, w0, h0);
        let (w2, h2) = logical_dims(Rotation::ROTATE_0, w1, h1);
        assert_eq!((w1, h1), (1024, 1280));
        // the physical pair survives the round trip
        let (wp, hp) = logical_dims(Rotation::ROTATE_90, w2, h2);
        assert_eq!((wp, hp), (w1, h1));
        assert_eq!(logical_dims(Rotation::ROTATE_0, w0, h0), (w0, h0));
    }
}
