//! Shadow buffer transforms.
//!
//! When the surface is rotated, rendering goes into a private shadow
//! buffer in logical orientation and is flushed to device memory through
//! one of these transforms. 16-bit surfaces get rotation-specific fast
//! paths; every other depth goes through the generic packed-pixel path.

use crate::fb::surface::Rotation;

/// Transform routine selected per rotation angle and bits-per-pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowUpdate {
    /// Straight row copy, unrotated shadow.
    Packed,
    /// Generic packed-pixel rotation, any depth.
    RotatePacked,
    /// 16bpp, reflection or other non-axis cases.
    Rotate16,
    /// 16bpp fast paths per angle.
    Rotate16_90,
    Rotate16_180,
    Rotate16_270,
}

impl ShadowUpdate {
    /// Pick the transform for a rotation/depth pair.
    pub fn select(rotation: Rotation, bits_per_pixel: u32) -> Self {
        if rotation.is_identity() {
            return ShadowUpdate::Packed;
        }
        if bits_per_pixel == 16 {
            match rotation.angle() {
                90 => ShadowUpdate::Rotate16_90,
                180 => ShadowUpdate::Rotate16_180,
                270 => ShadowUpdate::Rotate16_270,
                _ => ShadowUpdate::Rotate16,
            }
        } else {
            ShadowUpdate::RotatePacked
        }
    }

    /// Flush a full shadow buffer to device memory.
    ///
    /// `width`/`height` are the logical (shadow) dimensions; the device
    /// dimensions are the same pair, swapped for 90/270 rotations.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        self,
        rotation: Rotation,
        bits_per_pixel: u32,
        shadow: &[u8],
        shadow_stride: usize,
        fb: &mut [u8],
        fb_stride: usize,
        width: u32,
        height: u32,
    ) {
        match self {
            ShadowUpdate::Packed => {
                update_packed(shadow, shadow_stride, fb, fb_stride, height as usize)
            }
            _ => update_rotate(
                rotation,
                bits_per_pixel,
                shadow,
                shadow_stride,
                fb,
                fb_stride,
                width,
                height,
            ),
        }
    }
}

/// Shadow (logical) coordinate that lands at device pixel `(dx, dy)`.
pub fn source_coord(rotation: Rotation, width: u32, height: u32, dx: u32, dy: u32) -> (u32, u32) {
    let (mut sx, mut sy) = match rotation.angle() {
        90 => (dy, height - 1 - dx),
        180 => (width - 1 - dx, height - 1 - dy),
        270 => (width - 1 - dy, dx),
        _ => (dx, dy),
    };
    if rotation.contains(Rotation::REFLECT_X) {
        sx = width - 1 - sx;
    }
    if rotation.contains(Rotation::REFLECT_Y) {
        sy = height - 1 - sy;
    }
    (sx, sy)
}

fn update_packed(shadow: &[u8], shadow_stride: usize, fb: &mut [u8], fb_stride: usize, rows: usize) {
    let n = shadow_stride.min(fb_stride);
    for row in 0..rows {
        fb[row * fb_stride..row * fb_stride + n]
            .copy_from_slice(&shadow[row * shadow_stride..row * shadow_stride + n]);
    }
}

#[allow(clippy::too_many_arguments)]
fn update_rotate(
    rotation: Rotation,
    bits_per_pixel: u32,
    shadow: &[u8],
    shadow_stride: usize,
    fb: &mut [u8],
    fb_stride: usize,
    width: u32,
    height: u32,
) {
    let (dev_w, dev_h) = if rotation.is_portrait() {
        (height, width)
    } else {
        (width, height)
    };
    for dy in 0..dev_h {
        let dst = &mut fb[dy as usize * fb_stride..];
        for dx in 0..dev_w {
            let (sx, sy) = source_coord(rotation, width, height, dx, dy);
            let src = &shadow[sy as usize * shadow_stride..];
            let v = get_pixel(src, sx as usize, bits_per_pixel);
            put_pixel(dst, dx as usize, bits_per_pixel, v);
        }
    }
}

/// Read pixel `x` out of a packed row. Sub-byte depths use MSB-first
/// bit order within each byte.
fn get_pixel(row: &[u8], x: usize, bpp: u32) -> u32 {
    match bpp {
        8 => row[x] as u32,
        16 => u16::from_ne_bytes([row[2 * x], row[2 * x + 1]]) as u32,
        24 => {
            let o = 3 * x;
            u32::from_ne_bytes([row[o], row[o + 1], row[o + 2], 0])
        }
        32 => {
            let o = 4 * x;
            u32::from_ne_bytes([row[o], row[o + 1], row[o + 2], row[o + 3]])
        }
        _ => {
            let per_byte = (8 / bpp) as usize;
            let shift = (per_byte - 1 - x % per_byte) as u32 * bpp;
            let mask = (1u32 << bpp) - 1;
            (row[x / per_byte] as u32 >> shift) & mask
        }
    }
}

/// Write pixel `x` into a packed row.
fn put_pixel(row: &mut [u8], x: usize, bpp: u32, v: u32) {
    match bpp {
        8 => row[x] = v as u8,
        16 => row[2 * x..2 * x + 2].copy_from_slice(&(v as u16).to_ne_bytes()),
        24 => {
            let b = v.to_ne_bytes();
            row[3 * x..3 * x + 3].copy_from_slice(&b[..3]);
        }
        32 => row[4 * x..4 * x + 4].copy_from_slice(&v.to_ne_bytes()),
        _ => {
            let per_byte = (8 / bpp) as usize;
            let shift = (per_byte - 1 - x % per_byte) as u32 * bpp;
            let mask = (1u32 << bpp) - 1;
            let byte = &mut row[x / per_byte];
            *byte = (*byte & !((mask << shift) as u8)) | ((v & mask) << shift) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_rotation_and_depth() {
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_0, 16),
            ShadowUpdate::Packed
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_90, 16),
            ShadowUpdate::Rotate16_90
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_180, 16),
            ShadowUpdate::Rotate16_180
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_270, 16),
            ShadowUpdate::Rotate16_270
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_0 | Rotation::REFLECT_X, 16),
            ShadowUpdate::Rotate16
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_90, 32),
            ShadowUpdate::RotatePacked
        );
        assert_eq!(
            ShadowUpdate::select(Rotation::ROTATE_180, 8),
            ShadowUpdate::RotatePacked
        );
    }

    #[test]
    fn rotate16_90_transposes() {
        // 3x2 logical buffer of u16 pixels 1..=6:
        //   1 2 3
        //   4 5 6
        let shadow: Vec<u8> = [1u16, 2, 3, 4, 5, 6]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut fb = vec![0u8; 2 * 2 * 3];
        ShadowUpdate::Rotate16_90.run(Rotation::ROTATE_90, 16, &shadow, 6, &mut fb, 4, 3, 2);
        let out: Vec<u16> = fb
            .chunks(2)
            .map(|c| u16::from_ne_bytes([c[0], c[1]]))
            .collect();
        // device is 2x3; 90 degrees clockwise:
        //   4 1
        //   5 2
        //   6 3
        assert_eq!(out, vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn rotate16_180_reverses() {
        let shadow: Vec<u8> = [1u16, 2, 3, 4, 5, 6]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut fb = vec![0u8; 12];
        ShadowUpdate::Rotate16_180.run(Rotation::ROTATE_180, 16, &shadow, 6, &mut fb, 6, 3, 2);
        let out: Vec<u16> = fb
            .chunks(2)
            .map(|c| u16::from_ne_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(out, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn rotate_90_then_270_is_identity() {
        let (w, h) = (5u32, 3u32);
        let shadow: Vec<u8> = (0..15).collect();
        let mut mid = vec![0u8; 15];
        ShadowUpdate::RotatePacked.run(Rotation::ROTATE_90, 8, &shadow, 5, &mut mid, 3, w, h);
        let mut back = vec![0u8; 15];
        ShadowUpdate::RotatePacked.run(Rotation::ROTATE_270, 8, &mid, 3, &mut back, 5, h, w);
        assert_eq!(back, shadow);
    }

    #[test]
    fn packed_copy_honors_strides() {
        let shadow = [1u8, 2, 3, 0xAA, 4, 5, 6, 0xAA];
        let mut fb = [0u8; 6];
        ShadowUpdate::Packed.run(Rotation::ROTATE_0, 8, &shadow, 4, &mut fb, 3, 3, 2);
        assert_eq!(fb, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn subbyte_rotation_roundtrips_pixels() {
        // 4bpp 4x2 buffer, distinct nibbles
        let mut shadow = vec![0u8; 2 * 2];
        for y in 0..2 {
            for x in 0..4 {
                put_pixel(&mut shadow[y * 2..], x, 4, (y * 4 + x + 1) as u32);
            }
        }
        let mut fb = vec![0u8; 4 * 1]; // device 2x4 at 4bpp, stride 1
        ShadowUpdate::RotatePacked.run(Rotation::ROTATE_90, 4, &shadow, 2, &mut fb, 1, 4, 2);
        // clockwise: first device row is [5, 1]
        assert_eq!(get_pixel(&fb[0..], 0, 4), 5);
        assert_eq!(get_pixel(&fb[0..], 1, 4), 1);
        assert_eq!(get_pixel(&fb[3..], 0, 4), 8);
        assert_eq!(get_pixel(&fb[3..], 1, 4), 4);
    }
}
