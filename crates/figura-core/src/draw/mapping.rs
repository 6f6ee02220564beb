//! Non-linear mapping from an attribute's input range to a visual size.
//!
//! `map(v) = lo + (hi - lo) * ((v - lo) / (hi - lo))^γ`
//!
//! The mapping is monotonic, continuous and fixes both endpoints of the range.
//! `γ = 1` is the identity.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Error raised when a [`SizeMapping`] cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizeMappingError {
    #[error("size mapping exponent must be positive and finite, got {0}")]
    InvalidExponent(f64),

    #[error("size mapping range must satisfy lo < hi, got [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },
}

/// Power-curve mapping over a closed range.
///
/// # Examples
///
/// ```
/// use figura_core::draw::SizeMapping;
///
/// let mapping = SizeMapping::new(&(0.0..=100.0), 2.0).unwrap();
/// assert_eq!(mapping.map(0.0), 0.0);
/// assert_eq!(mapping.map(50.0), 25.0);
/// assert_eq!(mapping.map(100.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMapping {
    lo: f64,
    hi: f64,
    exponent: f64,
}

impl SizeMapping {
    /// Creates a mapping over `range` with the given exponent.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMappingError`] when the exponent is not a positive finite
    /// number or the range is empty.
    pub fn new(range: &RangeInclusive<f64>, exponent: f64) -> Result<Self, SizeMappingError> {
        if !(exponent.is_finite() && exponent > 0.0) {
            return Err(SizeMappingError::InvalidExponent(exponent));
        }
        let (lo, hi) = (*range.start(), *range.end());
        if !(lo < hi) {
            return Err(SizeMappingError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi, exponent })
    }

    /// Creates the identity mapping over `range`.
    pub fn identity(range: &RangeInclusive<f64>) -> Result<Self, SizeMappingError> {
        Self::new(range, 1.0)
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Maps `value` onto the visual scale. Values outside the range are clamped.
    pub fn map(&self, value: f64) -> f64 {
        let value = value.clamp(self.lo, self.hi);
        if self.exponent == 1.0 || value == self.hi {
            return value;
        }
        let span = self.hi - self.lo;
        let t = (value - self.lo) / span;
        (self.lo + span * t.powf(self.exponent)).clamp(self.lo, self.hi)
    }
}
