//! Throughput benchmark for LUT layouts.
//!
//! One random pixel batch is pushed through the dense table and then through
//! each configured flattened layout. Every batch is timed, checked for
//! length and range, and compared against the dense output.

use std::time::{Duration, Instant};

use lut3d::{
    apply_batch, apply_batch_parallel, table::validate_resolution, ColorLookup, DenseLut, FlatLut,
    Layout, Rgb,
};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::BenchError;
use crate::models::BenchConfig;

/// Report label of the dense table
pub const DENSE_LABEL: &str = "Standard 3D LUT";

/// Default table resolution of a single-pixel simulation
pub const SIMULATE_SIZE: usize = 17;

/// Elapsed time floor, keeps throughput finite for very fast batches
const MIN_ELAPSED_SECS: f64 = 1e-9;

/// Report label of a flattened layout
pub fn layout_label(layout: Layout) -> &'static str {
    match layout {
        Layout::RowMajor => "Row-Major Flat LUT",
        Layout::LevelOrdered => "Spatially-Local Flat LUT",
        Layout::Morton => "Morton-Order Flat LUT",
    }
}

/// Source of uniformly distributed pixels in [0, 1)
pub struct PixelSource {
    rng: StdRng,
    dist: Uniform<f32>,
}

impl PixelSource {
    /// Seeded source for reproducible batches, or entropy-seeded if `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            dist: Uniform::new(0.0, 1.0),
        }
    }

    /// Draw `count` pixels
    pub fn batch(&mut self, count: usize) -> Vec<Rgb> {
        (0..count)
            .map(|_| {
                Rgb::new(
                    self.rng.sample(&self.dist),
                    self.rng.sample(&self.dist),
                    self.rng.sample(&self.dist),
                )
            })
            .collect()
    }
}

/// Timing of one table representation over the batch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchResult {
    /// Human-readable table name
    pub label: String,
    /// "dense" or the layout name
    pub layout: String,
    /// Entries stored by this representation
    pub entries: usize,
    /// Wall-clock time of the batch in seconds
    pub elapsed_secs: f64,
    /// Pixels per second
    pub throughput: f64,
    /// Outputs differing from the dense table's outputs
    pub mismatches: usize,
}

/// Results of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub size: usize,
    pub pixels: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub results: Vec<BenchResult>,
}

/// Pixels per second for a batch, with elapsed time floored at 1 ns
pub fn throughput(pixels: usize, elapsed: Duration) -> f64 {
    pixels as f64 / elapsed.as_secs_f64().max(MIN_ELAPSED_SECS)
}

/// Check that a batch produced one in-range output per input pixel
pub fn verify_outputs(label: &str, expected: usize, outputs: &[Rgb]) -> Result<(), BenchError> {
    if outputs.len() != expected {
        return Err(BenchError::OutputCount {
            label: label.to_string(),
            expected,
            actual: outputs.len(),
        });
    }
    if let Some(index) = outputs.iter().position(|c| !c.is_normalized()) {
        return Err(BenchError::OutputOutOfRange {
            label: label.to_string(),
            index,
        });
    }
    Ok(())
}

/// Number of positions where two output batches differ
pub fn count_mismatches(reference: &[Rgb], outputs: &[Rgb]) -> usize {
    reference
        .iter()
        .zip(outputs)
        .filter(|(a, b)| a != b)
        .count()
}

/// Look up a single pixel in an identity table of the given resolution.
///
/// `layout` of `None` uses the dense table.
pub fn simulate_pixel(size: usize, layout: Option<Layout>, pixel: Rgb) -> Result<Rgb, BenchError> {
    let dense = DenseLut::identity(size)?;
    let output = match layout {
        Some(layout) => FlatLut::from_dense(&dense, layout).lookup(pixel),
        None => dense.lookup(pixel),
    };
    tracing::debug!(size, input = %pixel, output = %output, "Simulated lookup");
    Ok(output)
}

/// Benchmark runner over a validated configuration
pub struct Benchmark {
    config: BenchConfig,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        validate_resolution(config.size)?;
        if config.pixels == 0 {
            return Err(BenchError::EmptyBatch);
        }
        Ok(Self { config })
    }

    /// Generate a random batch and run every case over it
    pub fn run(&self) -> Result<BenchReport, BenchError> {
        let pixels = PixelSource::new(self.config.seed).batch(self.config.pixels);
        self.run_with_pixels(&pixels)
    }

    /// Run every case over a caller-supplied batch
    pub fn run_with_pixels(&self, pixels: &[Rgb]) -> Result<BenchReport, BenchError> {
        if pixels.is_empty() {
            return Err(BenchError::EmptyBatch);
        }

        let size = self.config.size;
        let dense = DenseLut::identity(size)?;
        tracing::info!(
            size,
            pixels = pixels.len(),
            parallel = self.config.parallel,
            "Built identity table"
        );

        let mut results = Vec::with_capacity(self.config.layouts.len() + 1);
        let (reference, dense_result) =
            self.time_case(DENSE_LABEL, "dense", &dense, dense.len(), pixels, None)?;
        results.push(dense_result);

        for &layout in &self.config.layouts {
            let flat = FlatLut::from_dense(&dense, layout);
            tracing::debug!(%layout, entries = flat.len(), "Flattened table");
            let (_, result) = self.time_case(
                layout_label(layout),
                layout.name(),
                &flat,
                flat.len(),
                pixels,
                Some(reference.as_slice()),
            )?;
            results.push(result);
        }

        Ok(BenchReport {
            size,
            pixels: pixels.len(),
            seed: self.config.seed,
            parallel: self.config.parallel,
            results,
        })
    }

    fn time_case<L>(
        &self,
        label: &str,
        layout: &str,
        lut: &L,
        entries: usize,
        pixels: &[Rgb],
        reference: Option<&[Rgb]>,
    ) -> Result<(Vec<Rgb>, BenchResult), BenchError>
    where
        L: ColorLookup + Sync,
    {
        let start = Instant::now();
        let outputs = if self.config.parallel {
            apply_batch_parallel(lut, pixels)
        } else {
            apply_batch(lut, pixels)
        };
        let elapsed = start.elapsed();

        verify_outputs(label, pixels.len(), &outputs)?;
        let mismatches = reference.map_or(0, |r| count_mismatches(r, &outputs));

        let result = BenchResult {
            label: label.to_string(),
            layout: layout.to_string(),
            entries,
            elapsed_secs: elapsed.as_secs_f64(),
            throughput: throughput(pixels.len(), elapsed),
            mismatches,
        };
        tracing::info!(
            lut = label,
            throughput = result.throughput,
            elapsed_secs = result.elapsed_secs,
            mismatches,
            "Timed batch"
        );

        Ok((outputs, result))
    }
}
