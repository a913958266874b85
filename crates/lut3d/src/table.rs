//! Dense 3D lookup table
//!
//! [`DenseLut`] stores the table as nested `r → g → b` vectors and is indexed
//! directly by grid coordinates. It is the reference every flattened layout
//! is measured against.

use crate::color::Rgb;
use crate::error::LutError;
use crate::grid::GridIndex;

/// Smallest supported resolution (grid points per axis).
pub const MIN_RESOLUTION: usize = 2;

/// Largest supported resolution (grid points per axis).
pub const MAX_RESOLUTION: usize = 256;

/// Reject resolutions outside `MIN_RESOLUTION..=MAX_RESOLUTION`.
pub fn validate_resolution(size: usize) -> Result<(), LutError> {
    if size < MIN_RESOLUTION {
        return Err(LutError::ResolutionTooSmall { size });
    }
    if size > MAX_RESOLUTION {
        return Err(LutError::ResolutionTooLarge {
            size,
            max: MAX_RESOLUTION,
        });
    }
    Ok(())
}

/// An N×N×N table stored as a 3D structure.
///
/// Built once, then read-only.
///
/// # Example
///
/// ```
/// use lut3d::{ColorLookup, DenseLut, Rgb};
///
/// let lut = DenseLut::identity(17).unwrap();
/// let out = lut.lookup(Rgb::new(0.5, 0.25, 0.75));
/// assert_eq!(out, Rgb::new(0.5, 0.25, 0.75));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLut {
    size: usize,
    cells: Vec<Vec<Vec<Rgb>>>,
}

impl DenseLut {
    /// Build the identity table: entry (r,g,b) = (r, g, b) / (N - 1).
    pub fn identity(size: usize) -> Result<Self, LutError> {
        let max = (size.max(MIN_RESOLUTION) - 1) as f32;
        Self::from_fn(size, |idx| {
            Rgb::new(idx.r as f32 / max, idx.g as f32 / max, idx.b as f32 / max)
        })
    }

    /// Build a table by evaluating `f` at every grid cell.
    ///
    /// Cells are visited in row-major order.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, LutError>
    where
        F: FnMut(GridIndex) -> Rgb,
    {
        validate_resolution(size)?;

        let mut cells = Vec::with_capacity(size);
        for r in 0..size {
            let mut plane = Vec::with_capacity(size);
            for g in 0..size {
                let mut row = Vec::with_capacity(size);
                for b in 0..size {
                    row.push(f(GridIndex::new(r, g, b)));
                }
                plane.push(row);
            }
            cells.push(plane);
        }

        Ok(Self { size, cells })
    }

    /// Grid points per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of entries (N³).
    #[inline]
    pub fn len(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Always false: a validated table has at least 8 entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Entry at a grid cell.
    ///
    /// # Panics
    /// Panics if any coordinate is `>= size()`.
    #[inline]
    pub fn get(&self, idx: GridIndex) -> Rgb {
        self.cells[idx.r][idx.g][idx.b]
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridIndex, Rgb)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, plane)| {
            plane.iter().enumerate().flat_map(move |(g, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(b, &rgb)| (GridIndex::new(r, g, b), rgb))
            })
        })
    }
}
