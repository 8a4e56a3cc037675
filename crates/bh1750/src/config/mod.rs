//! Configuration helpers for the BH1750.

pub(crate) mod mode;
pub(crate) mod mtreg;

pub use mode::{MeasurementMode, Resolution};
pub use mtreg::MeasurementTime;

use crate::interface::Bh1750Address;

/// BH1750 configuration applied during construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Device address. `None` scans the bus for either candidate address.
    pub address: Option<Bh1750Address>,
    /// Initial measurement mode.
    pub mode: MeasurementMode,
    /// Initial measurement time register value.
    pub measurement_time: MeasurementTime,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a default configuration (autodetect, continuous high resolution, MTreg 69).
    pub const fn new() -> Self {
        Self {
            address: None,
            mode: MeasurementMode::ContinuousHighResolution,
            measurement_time: MeasurementTime::DEFAULT,
        }
    }

    /// Pins the device address and skips the bus scan.
    #[must_use]
    pub const fn with_address(mut self, address: Bh1750Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Scans the bus for the device address.
    #[must_use]
    pub const fn with_autodetect(mut self) -> Self {
        self.address = None;
        self
    }

    /// Sets the initial measurement mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: MeasurementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the initial measurement time register, clamped into `31..=254`.
    #[must_use]
    pub const fn with_measurement_time(mut self, value: i32) -> Self {
        self.measurement_time = MeasurementTime::new(value);
        self
    }
}
