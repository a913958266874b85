//! Domain-critical regression tests for lut3d.
//!
//! Each test documents the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::apply::{apply_batch, ColorLookup};
    use crate::color::Rgb;
    use crate::grid::GridIndex;
    use crate::layout::{FlatLut, Layout};
    use crate::table::DenseLut;

    /// Deterministic pseudo-random pixels (xorshift), with a few values
    /// outside [0,1] mixed in.
    fn scattered_pixels(count: usize) -> Vec<Rgb> {
        let mut state: u32 = 0x9E37_79B9;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32) * 1.4 - 0.2
        };
        (0..count).map(|_| Rgb::new(next(), next(), next())).collect()
    }

    // ========================================================================
    // GAP 1: Identity tables must reproduce their own grid points
    // ========================================================================

    /// If this breaks, it means: quantization truncates values that are a
    /// few ULP below a grid point down to the lower neighbor, so an identity
    /// table no longer maps its own sample positions to themselves.
    #[test]
    fn test_identity_reproduces_grid_points() {
        for size in [2, 3, 7, 17, 33, 65] {
            let lut = DenseLut::identity(size).unwrap();
            let max = (size - 1) as f32;
            for r in 0..size {
                for g in [0, size / 2, size - 1] {
                    for b in [0, size / 3, size - 1] {
                        let c = Rgb::new(r as f32 / max, g as f32 / max, b as f32 / max);
                        assert_eq!(
                            lut.lookup(c),
                            c,
                            "REGRESSION: size {size} identity lookup of ({r},{g},{b}) moved"
                        );
                    }
                }
            }
        }
    }

    // ========================================================================
    // GAP 2: Out-of-range input must clamp, never panic or wrap
    // ========================================================================

    /// If this breaks, it means: a channel outside [0,1] reaches the index
    /// computation unclamped, producing an out-of-bounds access (panic) or a
    /// wrapped index.
    #[test]
    fn test_out_of_range_equals_clamped_lookup() {
        let dense = DenseLut::identity(17).unwrap();
        let flats: Vec<FlatLut> = Layout::ALL
            .iter()
            .map(|&layout| FlatLut::from_dense(&dense, layout))
            .collect();

        for c in [
            Rgb::new(1.5, -0.2, 0.5),
            Rgb::new(-10.0, 10.0, 2.0),
            Rgb::new(f32::INFINITY, f32::NEG_INFINITY, 0.0),
        ] {
            assert_eq!(dense.lookup(c), dense.lookup(c.clamped()));
            for flat in &flats {
                assert_eq!(flat.lookup(c), flat.lookup(c.clamped()), "{}", flat.layout());
            }
        }
        assert_eq!(
            dense.lookup(Rgb::new(1.5, -0.2, 0.5)),
            Rgb::new(1.0, 0.0, 0.5)
        );
    }

    /// If this breaks, it means: NaN input reaches an index computation that
    /// panics or reads out of bounds instead of falling back to index 0.
    #[test]
    fn test_nan_input_is_in_bounds() {
        let dense = DenseLut::identity(9).unwrap();
        let nan = Rgb::new(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(dense.lookup(nan), Rgb::new(0.0, 0.0, 0.0));
        for layout in Layout::ALL {
            let flat = FlatLut::from_dense(&dense, layout);
            assert_eq!(flat.lookup(nan), flat.entries()[0]);
        }
    }

    // ========================================================================
    // GAP 3: Bijective layouts must agree with the dense table
    // ========================================================================

    /// If this breaks, it means: a flattened layout's write order and read
    /// formula have drifted apart, so it silently returns the wrong cell.
    #[test]
    fn test_bijective_layouts_agree_with_dense() {
        for size in [2, 5, 16, 17, 33] {
            let dense = DenseLut::identity(size).unwrap();
            let pixels = scattered_pixels(2_000);
            let expected = apply_batch(&dense, &pixels);
            for layout in Layout::ALL.into_iter().filter(|l| l.is_bijective()) {
                let flat = FlatLut::from_dense(&dense, layout);
                assert_eq!(
                    apply_batch(&flat, &pixels),
                    expected,
                    "REGRESSION: {layout} disagrees with dense at size {size}"
                );
            }
        }
    }

    // ========================================================================
    // GAP 4: Level-ordered layout must keep its reference access pattern
    // ========================================================================

    /// If this breaks, it means: someone "fixed" the level-ordered layout.
    /// Its lookup must stay `entries[min(r·N²+g·N+b, len-1)]` over the
    /// diagonal emission order, otherwise benchmark numbers stop being
    /// comparable with the reference measurements.
    #[test]
    fn test_level_ordered_keeps_reference_indexing() {
        let size = 17;
        let dense = DenseLut::identity(size).unwrap();
        let flat = FlatLut::from_dense(&dense, Layout::LevelOrdered);

        // Reference pixel from the single-pixel demo
        let idx = GridIndex::quantize(Rgb::new(0.5, 0.25, 0.75), size);
        assert_eq!(idx, GridIndex::new(8, 4, 12));
        let offset = 8 * size * size + 4 * size + 12;
        assert_eq!(offset, 2392);
        assert!(offset < flat.len());
        assert_eq!(
            flat.lookup(Rgb::new(0.5, 0.25, 0.75)),
            flat.entries()[offset]
        );

        for px in scattered_pixels(1_000) {
            let idx = GridIndex::quantize(px, size);
            let expected = flat.entries()[idx.to_row_major(size).min(flat.len() - 1)];
            assert_eq!(flat.lookup(px), expected);
        }
    }

    /// If this breaks, it means: the level-ordered layout started agreeing
    /// with the dense table, so the traversal or its level range changed.
    #[test]
    fn test_level_ordered_differs_from_dense() {
        let dense = DenseLut::identity(17).unwrap();
        let flat = FlatLut::from_dense(&dense, Layout::LevelOrdered);
        let pixels = scattered_pixels(1_000);
        let mismatches = pixels
            .iter()
            .filter(|&&px| flat.lookup(px) != dense.lookup(px))
            .count();
        assert!(
            mismatches > pixels.len() / 2,
            "expected most level-ordered lookups to differ, got {mismatches}"
        );
    }

    // ========================================================================
    // GAP 5: Outputs of an identity table stay in [0,1]
    // ========================================================================

    /// If this breaks, it means: a layout stores or returns an entry that
    /// was never written (e.g. default zero padding replaced by garbage) or a
    /// table entry exceeds the unit cube.
    #[test]
    fn test_outputs_stay_normalized() {
        let dense = DenseLut::identity(33).unwrap();
        let pixels = scattered_pixels(5_000);
        assert!(apply_batch(&dense, &pixels).iter().all(|c| c.is_normalized()));
        for layout in Layout::ALL {
            let flat = FlatLut::from_dense(&dense, layout);
            assert!(flat.entries().iter().all(|c| c.is_normalized()));
            assert!(apply_batch(&flat, &pixels).iter().all(|c| c.is_normalized()));
        }
    }

    // ========================================================================
    // GAP 6: Non-identity tables are honored
    // ========================================================================

    /// If this breaks, it means: lookups ignore the table contents (e.g. a
    /// shortcut that assumes the identity mapping).
    #[test]
    fn test_inverting_table() {
        let size = 9;
        let max = (size - 1) as f32;
        let invert = DenseLut::from_fn(size, |idx| {
            Rgb::new(
                1.0 - idx.r as f32 / max,
                1.0 - idx.g as f32 / max,
                1.0 - idx.b as f32 / max,
            )
        })
        .unwrap();
        let flat = FlatLut::from_dense(&invert, Layout::RowMajor);
        let out = flat.lookup(Rgb::new(0.0, 1.0, 0.5));
        assert_eq!(out, Rgb::new(1.0, 0.0, 0.5));
        assert_eq!(invert.lookup(Rgb::new(0.0, 1.0, 0.5)), out);
    }
}
