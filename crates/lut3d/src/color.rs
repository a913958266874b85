//! RGB triple type
//!
//! [`Rgb`] is used both for lookup inputs (a pixel in [0,1]^3) and for the
//! entries stored in a table.

use std::fmt;

/// A color as three `f32` channels.
///
/// Channels are nominally in the range 0.0..=1.0. Inputs outside that range
/// are accepted and clamped when quantized against a table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Create a new color from its channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel to 0.0..=1.0.
    ///
    /// NaN channels stay NaN; quantization maps them to grid index 0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// True if every channel lies in 0.0..=1.0.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// The channels as an array, in r, g, b order.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.8} {:.8} {:.8}]", self.r, self.g, self.b)
    }
}
