//! Measurement modes for the BH1750.

use crate::command::mode as group;

/// Measurement resolution class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 1 lx steps, up to 180 ms per measurement.
    High,
    /// 0.5 lx steps, up to 180 ms per measurement.
    High2,
    /// 4 lx steps, up to 24 ms per measurement.
    Low,
}

impl Resolution {
    /// Worst-case measurement time at the default measurement time register, in milliseconds.
    pub const fn max_measurement_ms(self) -> u32 {
        match self {
            Self::High | Self::High2 => 180,
            Self::Low => 24,
        }
    }

    /// Nominal lux per count at the default measurement time register.
    pub const fn step_lux(self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::High2 => 0.5,
            Self::Low => 4.0,
        }
    }

    /// Extra divisor applied to the converted value (H-resolution mode 2 counts half-lux).
    pub(crate) const fn divisor(self) -> u32 {
        match self {
            Self::High2 => 2,
            Self::High | Self::Low => 1,
        }
    }

    const fn low_bits(self) -> u8 {
        match self {
            Self::High => 0x00,
            Self::High2 => 0x01,
            Self::Low => 0x03,
        }
    }
}

/// Measurement modes (resolution × repetition).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementMode {
    /// Continuous, 1 lx resolution (0x10).
    #[default]
    ContinuousHighResolution,
    /// Continuous, 0.5 lx resolution (0x11).
    ContinuousHighResolution2,
    /// Continuous, 4 lx resolution (0x13).
    ContinuousLowResolution,
    /// Single measurement, 1 lx resolution (0x20).
    OneTimeHighResolution,
    /// Single measurement, 0.5 lx resolution (0x21).
    OneTimeHighResolution2,
    /// Single measurement, 4 lx resolution (0x23).
    OneTimeLowResolution,
}

impl MeasurementMode {
    /// All modes, continuous first.
    pub const ALL: [Self; 6] = [
        Self::ContinuousHighResolution,
        Self::ContinuousHighResolution2,
        Self::ContinuousLowResolution,
        Self::OneTimeHighResolution,
        Self::OneTimeHighResolution2,
        Self::OneTimeLowResolution,
    ];

    /// Builds the continuous mode for `resolution`.
    pub const fn continuous(resolution: Resolution) -> Self {
        match resolution {
            Resolution::High => Self::ContinuousHighResolution,
            Resolution::High2 => Self::ContinuousHighResolution2,
            Resolution::Low => Self::ContinuousLowResolution,
        }
    }

    /// Builds the one-time mode for `resolution`.
    pub const fn one_time(resolution: Resolution) -> Self {
        match resolution {
            Resolution::High => Self::OneTimeHighResolution,
            Resolution::High2 => Self::OneTimeHighResolution2,
            Resolution::Low => Self::OneTimeLowResolution,
        }
    }

    /// Returns the opcode that selects this mode.
    pub const fn opcode(self) -> u8 {
        let repetition = if self.is_one_shot_mode() {
            group::ONE_TIME
        } else {
            group::CONTINUOUS
        };
        repetition | self.resolution().low_bits()
    }

    /// Decodes a mode opcode.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            0x10 => Some(Self::ContinuousHighResolution),
            0x11 => Some(Self::ContinuousHighResolution2),
            0x13 => Some(Self::ContinuousLowResolution),
            0x20 => Some(Self::OneTimeHighResolution),
            0x21 => Some(Self::OneTimeHighResolution2),
            0x23 => Some(Self::OneTimeLowResolution),
            _ => None,
        }
    }

    /// Returns the resolution class.
    pub const fn resolution(self) -> Resolution {
        match self {
            Self::ContinuousHighResolution | Self::OneTimeHighResolution => Resolution::High,
            Self::ContinuousHighResolution2 | Self::OneTimeHighResolution2 => Resolution::High2,
            Self::ContinuousLowResolution | Self::OneTimeLowResolution => Resolution::Low,
        }
    }

    /// Returns true if the device powers down after one measurement.
    ///
    /// Decided from the opcode group so it always agrees with what is on the wire.
    pub const fn is_one_shot(self) -> bool {
        (self.opcode() & group::GROUP_MASK) == group::ONE_TIME
    }

    /// Returns true if the device keeps measuring after each result.
    pub const fn is_continuous(self) -> bool {
        !self.is_one_shot()
    }

    const fn is_one_shot_mode(self) -> bool {
        matches!(
            self,
            Self::OneTimeHighResolution | Self::OneTimeHighResolution2 | Self::OneTimeLowResolution
        )
    }
}
