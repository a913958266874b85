//! Common test infrastructure for lutbench integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use lut3d::Rgb;
use lutbench::benchmark::BenchReport;

/// Assert every result in a report has a finite, positive throughput
pub fn assert_finite_throughput(report: &BenchReport) {
    for result in &report.results {
        assert!(
            result.throughput.is_finite() && result.throughput > 0.0,
            "{}: throughput {} is not finite and positive",
            result.label,
            result.throughput
        );
        assert!(result.elapsed_secs >= 0.0);
    }
}

/// Assert every pixel has all channels in [0, 1]
pub fn assert_normalized(pixels: &[Rgb]) {
    if let Some((i, px)) = pixels.iter().enumerate().find(|(_, px)| !px.is_normalized()) {
        panic!("pixel {i} out of range: {px}");
    }
}
