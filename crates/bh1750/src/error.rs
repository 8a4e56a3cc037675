//! Error type for the BH1750 driver.

use core::fmt;

/// Bus transfer that was in flight when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOperation {
    /// Address discovery scan.
    Scan,
    /// Single-byte command write; carries the opcode that was rejected.
    Write(u8),
    /// Two-byte measurement result read.
    Read,
}

/// Error type for BH1750 operations.
///
/// `E` is the error type of the underlying bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// No sensor answered on either candidate address during autodetection.
    NotPresent,
    /// Bus communication error.
    Bus {
        /// Transfer that failed.
        operation: BusOperation,
        /// Error reported by the bus implementation.
        source: E,
    },
}

impl<E> Error<E> {
    pub(crate) const fn bus(operation: BusOperation, source: E) -> Self {
        Self::Bus { operation, source }
    }

    /// Returns the failed bus operation, if this is a bus error.
    pub const fn operation(&self) -> Option<BusOperation> {
        match self {
            Self::NotPresent => None,
            Self::Bus { operation, .. } => Some(*operation),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPresent => write!(f, "BH1750 not found at 0x23 or 0x5C"),
            Self::Bus {
                operation: BusOperation::Scan,
                source,
            } => write!(f, "I2C scan failed: {source:?}"),
            Self::Bus {
                operation: BusOperation::Write(opcode),
                source,
            } => write!(f, "I2C write of 0x{opcode:02X} failed: {source:?}"),
            Self::Bus {
                operation: BusOperation::Read,
                source,
            } => write!(f, "I2C read failed: {source:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::NotPresent => defmt::write!(f, "BH1750 not found"),
            Self::Bus { operation, source } => {
                defmt::write!(f, "I2C error during {}: {}", operation, source);
            }
        }
    }
}
