//! Shared test data.

use lut3d::Rgb;
use lutbench::models::BenchConfig;

/// Reference pixel of the single-pixel demo
pub const REFERENCE_PIXEL: Rgb = Rgb::new(0.5, 0.25, 0.75);

/// Seeded config that runs quickly
pub fn quick_config(size: usize, pixels: usize) -> BenchConfig {
    BenchConfig {
        size,
        pixels,
        seed: Some(42),
        ..BenchConfig::default()
    }
}

/// Evenly spaced pixels along the cube diagonal plus the corners
pub fn diagonal_pixels(count: usize) -> Vec<Rgb> {
    let mut pixels: Vec<Rgb> = (0..count)
        .map(|i| {
            let t = i as f32 / count.max(2).saturating_sub(1) as f32;
            Rgb::new(t, 1.0 - t, (t * 3.0).fract())
        })
        .collect();
    for r in [0.0, 1.0] {
        for g in [0.0, 1.0] {
            for b in [0.0, 1.0] {
                pixels.push(Rgb::new(r, g, b));
            }
        }
    }
    pixels
}
