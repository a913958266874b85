//! lutbench - 3D LUT layout benchmark
//!
//! Times nearest-neighbor lookups through a dense table and through
//! flattened layouts of the same table.
//! This library exposes modules for integration testing.

pub mod benchmark;
pub mod error;
pub mod models;
pub mod report;
