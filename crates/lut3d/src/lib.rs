#![allow(clippy::needless_range_loop)]

//! lut3d: nearest-neighbor 3D color lookup tables
//!
//! This library applies discretized color transforms (3D LUTs) to pixels and
//! provides several memory layouts for the same logical table, so their
//! access cost can be compared.
//!
//! # Quick Start
//!
//! ```
//! use lut3d::{apply_batch, ColorLookup, DenseLut, FlatLut, Layout, Rgb};
//!
//! let dense = DenseLut::identity(17).unwrap();
//! let flat = FlatLut::from_dense(&dense, Layout::RowMajor);
//!
//! let pixel = Rgb::new(0.5, 0.25, 0.75);
//! assert_eq!(dense.lookup(pixel), flat.lookup(pixel));
//!
//! let out = apply_batch(&flat, &[pixel; 4]);
//! assert_eq!(out.len(), 4);
//! ```
//!
//! # Lookup
//!
//! Every lookup goes through the same steps:
//!
//! ```text
//! Rgb input
//!     |
//!     v
//! clamp to [0,1]^3
//!     |
//!     v
//! scale by (N - 1), truncate      -> GridIndex
//!     |
//!     +---> DenseLut: cells[r][g][b]
//!     |
//!     +---> FlatLut:  entries[min(layout.offset(idx), len - 1)]
//! ```
//!
//! Truncation picks the lower neighbor; there is no interpolation.
//!
//! # Layouts
//!
//! - [`DenseLut`]: nested `r → g → b` vectors, indexed directly.
//! - [`Layout::RowMajor`]: one contiguous `N³` sequence, `r·N² + g·N + b`.
//! - [`Layout::LevelOrdered`]: cells grouped by `r + g + b`, read back with
//!   the row-major formula. Does not agree with the dense table; see
//!   [`layout`] for details.
//! - [`Layout::Morton`]: Z-order curve over a power-of-two padded grid.
//!
//! # Errors
//!
//! Lookups never fail. Table construction rejects resolutions outside
//! [`MIN_RESOLUTION`]`..=`[`MAX_RESOLUTION`] with [`LutError`].

pub mod apply;
pub mod color;
pub mod error;
pub mod grid;
pub mod layout;
pub mod table;

#[cfg(test)]
mod domain_tests;

pub use apply::{apply_batch, apply_batch_parallel, ColorLookup};
pub use color::Rgb;
pub use error::LutError;
pub use grid::GridIndex;
pub use layout::{FlatLut, Layout};
pub use table::{DenseLut, MAX_RESOLUTION, MIN_RESOLUTION};
