//! Measurement time register (MTreg).

use crate::command::mtreg;

/// Measurement time register value, always within `31..=254`.
///
/// Raising it lengthens integration time and increases sensitivity;
/// the default of 69 gives the datasheet's nominal 1.2 counts per lux.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementTime(u8);

impl MeasurementTime {
    /// Smallest accepted value.
    pub const MIN: Self = Self(31);
    /// Largest accepted value.
    pub const MAX: Self = Self(254);
    /// Power-on default.
    pub const DEFAULT: Self = Self(69);

    /// Creates a value, clamping into `31..=254`.
    pub const fn new(value: i32) -> Self {
        if value < Self::MIN.0 as i32 {
            Self::MIN
        } else if value > Self::MAX.0 as i32 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    /// Returns the register value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the two opcodes that load this value, high bits first.
    pub const fn command_bytes(self) -> [u8; 2] {
        [
            mtreg::HIGH_PREFIX | (self.0 >> mtreg::HIGH_SHIFT),
            mtreg::LOW_PREFIX | (self.0 & mtreg::LOW_MASK),
        ]
    }
}

impl Default for MeasurementTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for MeasurementTime {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<MeasurementTime> for u8 {
    fn from(value: MeasurementTime) -> Self {
        value.get()
    }
}
