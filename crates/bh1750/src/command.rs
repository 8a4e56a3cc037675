//! BH1750 instruction set.
//!
//! The device has no register map; every interaction is a single opcode
//! byte written to the device address. Measurement mode opcodes live on
//! [`MeasurementMode`](crate::MeasurementMode).

/// Power and data-register control opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Command {
    /// No active state.
    PowerDown = 0x00,
    /// Waiting for a measurement command.
    PowerOn = 0x01,
    /// Clears the data register. Ignored while powered down.
    Reset = 0x07,
}

impl Command {
    pub(crate) const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Settle time after power-on and reset, in milliseconds.
pub(crate) const COMMAND_DELAY_MS: u32 = 5;

/// Measurement time register write prefixes.
pub(crate) mod mtreg {
    /// `01000_MT[7:5]`
    pub(crate) const HIGH_PREFIX: u8 = 0b0100_0000;
    /// `011_MT[4:0]`
    pub(crate) const LOW_PREFIX: u8 = 0b0110_0000;
    pub(crate) const HIGH_SHIFT: u8 = 5;
    pub(crate) const LOW_MASK: u8 = 0b0001_1111;
}

/// Mode opcode groups (upper nibble).
pub(crate) mod mode {
    pub(crate) const GROUP_MASK: u8 = 0xF0;
    pub(crate) const CONTINUOUS: u8 = 0x10;
    pub(crate) const ONE_TIME: u8 = 0x20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_match_datasheet() {
        assert_eq!(Command::PowerDown.opcode(), 0x00);
        assert_eq!(Command::PowerOn.opcode(), 0x01);
        assert_eq!(Command::Reset.opcode(), 0x07);
    }
}
