//! Interface abstraction for command I/O.
//!
//! The BH1750 is driven with bare opcode writes and raw reads, so the
//! interface only needs three primitives: scan, write, read.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod scan;

pub use address::Bh1750Address;
pub use i2c::I2cInterface;
pub use scan::{SCAN_END_ADDR, SCAN_START_ADDR, ScanResult};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal blocking bus I/O for the driver.
pub trait Interface: sealed::Sealed {
    /// Error reported by the bus.
    type Error;

    /// Returns every address that acknowledged.
    ///
    /// Silence is absence; a fault on the bus is returned as an error.
    fn scan(&mut self) -> Result<ScanResult, Self::Error>;
    /// Writes `data` to the device at `address`.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
    /// Fills `buffer` from the device at `address`.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Minimal async bus I/O for the driver.
#[allow(async_fn_in_trait)]
pub trait AsyncInterface: sealed::Sealed {
    /// Error reported by the bus.
    type Error;

    /// Returns every address that acknowledged.
    ///
    /// Silence is absence; a fault on the bus is returned as an error.
    async fn scan(&mut self) -> Result<ScanResult, Self::Error>;
    /// Writes `data` to the device at `address`.
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
    /// Fills `buffer` from the device at `address`.
    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}
