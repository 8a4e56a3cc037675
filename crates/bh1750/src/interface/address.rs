//! I2C address definitions for the BH1750.

use super::ScanResult;

/// BH1750 I2C addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bh1750Address {
    /// 0x23 (ADDR pin low or floating).
    #[default]
    Low,
    /// 0x5C (ADDR pin high).
    High,
}

impl Bh1750Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Low => 0x23,
            Self::High => 0x5C,
        }
    }

    /// Maps a 7-bit address back to a candidate, if it is one.
    pub const fn from_addr(addr: u8) -> Option<Self> {
        match addr {
            0x23 => Some(Self::Low),
            0x5C => Some(Self::High),
            _ => None,
        }
    }

    /// Picks the sensor address from a bus scan.
    ///
    /// `Low` wins when both addresses answer.
    pub fn detect(scan: &ScanResult) -> Option<Self> {
        [Self::Low, Self::High]
            .into_iter()
            .find(|candidate| scan.contains(candidate.addr()))
    }
}
