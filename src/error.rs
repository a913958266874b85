use std::path::PathBuf;

use lut3d::LutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("LUT error: {0}")]
    Lut(#[from] LutError),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Pixel batch is empty")]
    EmptyBatch,

    #[error("{label}: expected {expected} output pixels, got {actual}")]
    OutputCount {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("{label}: output pixel {index} is outside [0, 1]")]
    OutputOutOfRange { label: String, index: usize },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
