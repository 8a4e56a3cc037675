//! Integer scaling helpers for raw counts.

use crate::config::{MeasurementMode, MeasurementTime};

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: u32,
    /// Scale denominator.
    pub denominator: u32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scales `counts` to whole lux, truncating.
    pub const fn lux(self, counts: u16) -> u32 {
        (counts as u64 * self.numerator as u64 / self.denominator as u64) as u32
    }

    /// Scales `counts` to milli-lux, truncating.
    pub const fn millilux(self, counts: u16) -> u32 {
        (counts as u64 * self.numerator as u64 * 1000 / self.denominator as u64) as u32
    }
}

/// Returns lux per count as a ratio: `10 * 69 / (12 * mtreg * divisor)`.
///
/// `1 / 1.2` is carried as `10 / 12` so the ratio stays integral.
pub const fn lux_scale(mode: MeasurementMode, mtreg: MeasurementTime) -> ScaleFactor {
    let numerator = 10 * MeasurementTime::DEFAULT.get() as u32;
    let denominator = 12 * mtreg.get() as u32 * mode.resolution().divisor();
    ScaleFactor::new(numerator, denominator)
}
