//! Error types for table construction and layout parsing

use std::fmt;

/// Error type for LUT construction.
///
/// Lookups themselves never fail; invalid inputs there are clamped. Errors
/// are only raised when a table is built or a layout name is parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum LutError {
    /// Resolution below the minimum of 2 grid points per axis
    ResolutionTooSmall {
        /// Requested resolution
        size: usize,
    },
    /// Resolution above the supported maximum
    ResolutionTooLarge {
        /// Requested resolution
        size: usize,
        /// Largest accepted resolution
        max: usize,
    },
    /// Layout name that does not match any known layout
    UnknownLayout(String),
}

impl fmt::Display for LutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutError::ResolutionTooSmall { size } => {
                write!(f, "LUT resolution {} is too small (minimum 2)", size)
            }
            LutError::ResolutionTooLarge { size, max } => {
                write!(f, "LUT resolution {} is too large (maximum {})", size, max)
            }
            LutError::UnknownLayout(name) => {
                write!(
                    f,
                    "unknown layout '{}' (expected row-major, level-ordered or morton)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for LutError {}
