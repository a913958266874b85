//! Flattened table layouts
//!
//! A [`FlatLut`] stores the same logical table as a [`DenseLut`] in a single
//! contiguous sequence. The [`Layout`] decides both the order in which cells
//! are written and the index function used to read them back.
//!
//! | Layout | Length | Lookup agrees with dense table |
//! |--------|--------|--------------------------------|
//! | [`Layout::RowMajor`] | N³ | yes |
//! | [`Layout::LevelOrdered`] | ≤ N³ | no (see below) |
//! | [`Layout::Morton`] | P³, P = N rounded up to a power of two | yes |
//!
//! # Level-ordered layout
//!
//! Cells are emitted grouped by `r + g + b` for levels `0..2N`, so cells with
//! a coordinate sum of `2N` or more are never stored. Lookups still use the
//! row-major formula and clamp the offset to the last entry. Emission order
//! and index function disagree; most lookups therefore return the entry of a
//! different cell. This mirrors the benchmark being reproduced and is kept
//! as-is so the measured access pattern stays the same.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::LutError;
use crate::grid::GridIndex;
use crate::table::DenseLut;

/// Memory layout of a flattened table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `r·N² + g·N + b`, last coordinate varies fastest.
    RowMajor,
    /// Diagonal traversal by coordinate sum, read with the row-major formula.
    LevelOrdered,
    /// Bit-interleaved Z-order curve over a power-of-two padded grid.
    Morton,
}

impl Layout {
    /// Every layout, in reporting order.
    pub const ALL: [Layout; 3] = [Layout::RowMajor, Layout::LevelOrdered, Layout::Morton];

    /// Stable kebab-case name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Layout::RowMajor => "row-major",
            Layout::LevelOrdered => "level-ordered",
            Layout::Morton => "morton",
        }
    }

    /// Whether lookups through this layout agree with the dense table.
    pub fn is_bijective(self) -> bool {
        !matches!(self, Layout::LevelOrdered)
    }

    /// Unclamped linear offset of a grid cell for a table of resolution `size`.
    #[inline]
    pub fn offset(self, idx: GridIndex, size: usize) -> usize {
        match self {
            Layout::RowMajor | Layout::LevelOrdered => idx.to_row_major(size),
            Layout::Morton => idx.to_morton(),
        }
    }

    /// Number of entries a flattened table of resolution `size` holds.
    pub fn flat_len(self, size: usize) -> usize {
        match self {
            Layout::RowMajor => size * size * size,
            Layout::LevelOrdered => (0..2 * size).map(|level| level_count(level, size)).sum(),
            Layout::Morton => {
                let padded = size.next_power_of_two();
                padded * padded * padded
            }
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "row-major" | "rowmajor" => Ok(Layout::RowMajor),
            "level-ordered" | "levelordered" | "diagonal" => Ok(Layout::LevelOrdered),
            "morton" | "z-order" => Ok(Layout::Morton),
            _ => Err(LutError::UnknownLayout(s.to_string())),
        }
    }
}

/// Number of cells with `r + g + b == level` on an N×N×N grid.
fn level_count(level: usize, size: usize) -> usize {
    let mut count = 0;
    for r in 0..size.min(level + 1) {
        for g in 0..size.min(level - r + 1) {
            if level - r - g < size {
                count += 1;
            }
        }
    }
    count
}

/// A table flattened into one contiguous sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatLut {
    layout: Layout,
    size: usize,
    entries: Vec<Rgb>,
}

impl FlatLut {
    /// Flatten a dense table using the given layout.
    pub fn from_dense(dense: &DenseLut, layout: Layout) -> Self {
        let size = dense.size();
        let mut entries = Vec::with_capacity(layout.flat_len(size));

        match layout {
            Layout::RowMajor => {
                entries.extend(dense.iter().map(|(_, rgb)| rgb));
            }
            Layout::LevelOrdered => {
                for level in 0..2 * size {
                    for r in 0..size {
                        for g in 0..size {
                            // b = level - r - g, kept only when 0 <= b < size
                            if let Some(b) = level.checked_sub(r + g) {
                                if b < size {
                                    entries.push(dense.get(GridIndex::new(r, g, b)));
                                }
                            }
                        }
                    }
                }
            }
            Layout::Morton => {
                let padded = size.next_power_of_two();
                for offset in 0..padded * padded * padded {
                    let idx = GridIndex::from_morton(offset).clamped(size);
                    entries.push(dense.get(idx));
                }
            }
        }

        Self {
            layout,
            size,
            entries,
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Grid points per axis of the source table.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, in layout order.
    #[inline]
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// Offset read for a grid cell: the layout offset clamped to the last entry.
    #[inline]
    pub fn offset(&self, idx: GridIndex) -> usize {
        self.layout
            .offset(idx, self.size)
            .min(self.entries.len().saturating_sub(1))
    }

    /// Entry read for a grid cell.
    #[inline]
    pub fn get(&self, idx: GridIndex) -> Rgb {
        self.entries[self.offset(idx)]
    }
}
