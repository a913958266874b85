//! Nearest-neighbor lookup and batch application
//!
//! [`ColorLookup`] is the seam shared by every table representation. Batch
//! helpers work on any implementation, sequentially or split across the
//! rayon thread pool.

use rayon::prelude::*;

use crate::color::Rgb;
use crate::grid::GridIndex;
use crate::layout::FlatLut;
use crate::table::DenseLut;

/// A table that maps a color to an output color by nearest-neighbor lookup.
pub trait ColorLookup {
    /// Grid points per axis.
    fn size(&self) -> usize;

    /// Entry stored for an already quantized grid cell.
    fn fetch(&self, idx: GridIndex) -> Rgb;

    /// Look up one color.
    ///
    /// The input is clamped to [0,1]^3, quantized by truncation and the
    /// entry of the resulting cell returned. Never fails.
    #[inline]
    fn lookup(&self, rgb: Rgb) -> Rgb {
        self.fetch(GridIndex::quantize(rgb, self.size()))
    }
}

impl ColorLookup for DenseLut {
    #[inline]
    fn size(&self) -> usize {
        DenseLut::size(self)
    }

    #[inline]
    fn fetch(&self, idx: GridIndex) -> Rgb {
        self.get(idx)
    }
}

impl ColorLookup for FlatLut {
    #[inline]
    fn size(&self) -> usize {
        FlatLut::size(self)
    }

    #[inline]
    fn fetch(&self, idx: GridIndex) -> Rgb {
        self.get(idx)
    }
}

/// Apply a table to every pixel, in order.
pub fn apply_batch<L>(lut: &L, pixels: &[Rgb]) -> Vec<Rgb>
where
    L: ColorLookup + ?Sized,
{
    pixels.iter().map(|&rgb| lut.lookup(rgb)).collect()
}

/// Apply a table to every pixel using the rayon thread pool.
///
/// Output order matches input order and the result is identical to
/// [`apply_batch`].
pub fn apply_batch_parallel<L>(lut: &L, pixels: &[Rgb]) -> Vec<Rgb>
where
    L: ColorLookup + Sync + ?Sized,
{
    pixels.par_iter().map(|&rgb| lut.lookup(rgb)).collect()
}
