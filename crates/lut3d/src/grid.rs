//! Grid quantization and linear index functions
//!
//! A [`GridIndex`] addresses one cell of an N×N×N table. This module maps
//! continuous colors onto the grid and converts grid cells to and from the
//! linear offsets used by flattened tables.

use crate::color::Rgb;

/// Bits per axis covered by the Morton encoding (enough for resolution 256).
const MORTON_BITS: u32 = 8;

/// Relative distance to a grid point below which a scaled channel snaps to it.
///
/// `r / (N - 1)` rounded to `f32` and scaled back by `N - 1` can land a few
/// ULP below `r`; plain truncation would then pick the lower neighbor.
const SNAP_EPSILON: f32 = 2.0 * f32::EPSILON;

/// Integer coordinates of one table cell, each in `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridIndex {
    pub r: usize,
    pub g: usize,
    pub b: usize,
}

impl GridIndex {
    #[inline]
    pub const fn new(r: usize, g: usize, b: usize) -> Self {
        Self { r, g, b }
    }

    /// Quantize a color onto a grid with `size` points per axis.
    ///
    /// Each channel is clamped to 0.0..=1.0, scaled by `size - 1` and
    /// truncated toward zero, so lookups pick the lower neighbor. NaN
    /// channels quantize to 0.
    ///
    /// A scaled value within `2·f32::EPSILON` (relative) of a grid point snaps
    /// to that point instead of truncating. This keeps exact grid colors such
    /// as `13.0 / 22.0` on their own cell, but it also moves genuine inputs
    /// one or two ULP below a grid point up to it: with `size` 2,
    /// `0.99999994` maps to 1 rather than 0, and with `size` 17,
    /// `0.49999997` maps to 8 rather than 7.
    #[inline]
    pub fn quantize(rgb: Rgb, size: usize) -> Self {
        debug_assert!(size >= 2, "quantize: resolution {size} below 2");
        let max_index = size.saturating_sub(1);
        Self {
            r: quantize_channel(rgb.r, max_index),
            g: quantize_channel(rgb.g, max_index),
            b: quantize_channel(rgb.b, max_index),
        }
    }

    /// Row-major offset: `r·N² + g·N + b`.
    ///
    /// Bijective onto `0..N³` for every in-range index.
    #[inline]
    pub fn to_row_major(self, size: usize) -> usize {
        self.r * size * size + self.g * size + self.b
    }

    /// Inverse of [`to_row_major`](Self::to_row_major).
    #[inline]
    pub fn from_row_major(offset: usize, size: usize) -> Self {
        Self {
            r: offset / (size * size),
            g: (offset / size) % size,
            b: offset % size,
        }
    }

    /// Morton (Z-order) offset: the bits of r, g and b interleaved, with r
    /// in the most significant position of each triplet.
    ///
    /// For coordinates below `P = 2^k` the offset is below `P³`.
    #[inline]
    pub fn to_morton(self) -> usize {
        let mut offset = 0;
        for bit in 0..MORTON_BITS {
            offset |= ((self.r >> bit) & 1) << (3 * bit + 2);
            offset |= ((self.g >> bit) & 1) << (3 * bit + 1);
            offset |= ((self.b >> bit) & 1) << (3 * bit);
        }
        offset
    }

    /// Inverse of [`to_morton`](Self::to_morton).
    #[inline]
    pub fn from_morton(offset: usize) -> Self {
        let mut index = Self::default();
        for bit in 0..MORTON_BITS {
            index.r |= ((offset >> (3 * bit + 2)) & 1) << bit;
            index.g |= ((offset >> (3 * bit + 1)) & 1) << bit;
            index.b |= ((offset >> (3 * bit)) & 1) << bit;
        }
        index
    }

    /// Clamp every coordinate to `0..size`.
    #[inline]
    pub fn clamped(self, size: usize) -> Self {
        let max_index = size.saturating_sub(1);
        Self {
            r: self.r.min(max_index),
            g: self.g.min(max_index),
            b: self.b.min(max_index),
        }
    }
}

#[inline]
fn quantize_channel(value: f32, max_index: usize) -> usize {
    let scaled = value.clamp(0.0, 1.0) * max_index as f32;
    let nearest = scaled.round();
    let snapped = if (scaled - nearest).abs() <= SNAP_EPSILON * nearest.max(1.0) {
        nearest
    } else {
        scaled.trunc()
    };
    // Saturating cast: NaN becomes 0.
    (snapped as usize).min(max_index)
}
