//! I2C interface adapter for the BH1750.

use embedded_hal::i2c::{Error as I2cError, ErrorKind, I2c as BlockingI2c};
use embedded_hal_async::i2c::I2c as AsyncI2c;

use super::{AsyncInterface, Interface, SCAN_END_ADDR, SCAN_START_ADDR, ScanResult, sealed};

/// I2C command interface.
///
/// Implements [`Interface`] for blocking `embedded-hal` buses and
/// [`AsyncInterface`] for `embedded-hal-async` buses.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Wraps an I2C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

// Scans address each target with a 1-byte read. A dummy write would reach
// the BH1750 as an opcode, and 0x00 is power-down.
impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: BlockingI2c,
{
    type Error = I2C::Error;

    fn scan(&mut self) -> Result<ScanResult, Self::Error> {
        let mut result = ScanResult::new();
        let mut byte = [0u8];
        for addr in SCAN_START_ADDR..=SCAN_END_ADDR {
            if acknowledged(BlockingI2c::read(&mut self.i2c, addr, &mut byte))? {
                result.insert(addr);
            }
        }
        Ok(result)
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        BlockingI2c::write(&mut self.i2c, address, data)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        BlockingI2c::read(&mut self.i2c, address, buffer)
    }
}

impl<I2C> AsyncInterface for I2cInterface<I2C>
where
    I2C: AsyncI2c,
{
    type Error = I2C::Error;

    async fn scan(&mut self) -> Result<ScanResult, Self::Error> {
        let mut result = ScanResult::new();
        let mut byte = [0u8];
        for addr in SCAN_START_ADDR..=SCAN_END_ADDR {
            if acknowledged(AsyncI2c::read(&mut self.i2c, addr, &mut byte).await)? {
                result.insert(addr);
            }
        }
        Ok(result)
    }

    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        AsyncI2c::write(&mut self.i2c, address, data).await
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        AsyncI2c::read(&mut self.i2c, address, buffer).await
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

/// Maps a scan read to presence. A NACK means nothing answered; any other
/// failure is a bus fault and aborts the scan.
fn acknowledged<E: I2cError>(result: Result<(), E>) -> Result<bool, E> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if matches!(err.kind(), ErrorKind::NoAcknowledge(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use embedded_hal::i2c::NoAcknowledgeSource;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use futures::executor::block_on;

    use super::*;
    use crate::config::Config;
    use crate::error::{BusOperation, Error};
    use crate::interface::Bh1750Address;
    use crate::{Bh1750, Bh1750Async};

    const NACK: ErrorKind = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);

    /// One read per scanned address, acknowledged only for `present`.
    fn scan_expectations(present: &[u8]) -> Vec<I2cTransaction> {
        (SCAN_START_ADDR..=SCAN_END_ADDR)
            .map(|addr| {
                let read = I2cTransaction::read(addr, vec![0]);
                if present.contains(&addr) {
                    read
                } else {
                    read.with_error(NACK)
                }
            })
            .collect()
    }

    fn startup_writes(addr: u8) -> Vec<I2cTransaction> {
        [0x01, 0x07, 0x42, 0x65, 0x10]
            .into_iter()
            .map(|byte| I2cTransaction::write(addr, vec![byte]))
            .collect()
    }

    #[test]
    fn construction_sends_startup_sequence() {
        let i2c = I2cMock::new(&startup_writes(0x23));
        let config = Config::new().with_address(Bh1750Address::Low);
        let driver = Bh1750::new_i2c(i2c, &mut NoopDelay::new(), config).expect("init");
        driver.release().done();
    }

    #[test]
    fn scan_treats_nack_as_absent() {
        let mut expectations = scan_expectations(&[0x3C, 0x5C]);
        expectations.extend(startup_writes(0x5C));
        let i2c = I2cMock::new(&expectations);

        let driver = Bh1750::new_i2c(i2c, &mut NoopDelay::new(), Config::new()).expect("init");
        assert_eq!(driver.address(), Bh1750Address::High);
        driver.release().done();
    }

    #[test]
    fn scan_reports_nothing_answering_as_not_present() {
        let mut i2c = I2cMock::new(&scan_expectations(&[]));
        let result = Bh1750::new_i2c(i2c.clone(), &mut NoopDelay::new(), Config::new());
        assert!(matches!(result, Err(Error::NotPresent)));
        i2c.done();
    }

    #[test]
    fn scan_stops_on_bus_fault() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::read(SCAN_START_ADDR, vec![0]).with_error(ErrorKind::Bus),
        ]);

        let result = Bh1750::new_i2c(i2c.clone(), &mut NoopDelay::new(), Config::new());
        assert_eq!(
            result.err(),
            Some(Error::Bus {
                operation: BusOperation::Scan,
                source: ErrorKind::Bus,
            })
        );
        i2c.done();
    }

    #[test]
    fn scan_keeps_arbitration_loss_as_error() {
        let mut interface = I2cInterface::new(I2cMock::new(&[
            I2cTransaction::read(0x08, vec![0]).with_error(NACK),
            I2cTransaction::read(0x09, vec![0]).with_error(ErrorKind::ArbitrationLoss),
        ]));
        assert_eq!(Interface::scan(&mut interface), Err(ErrorKind::ArbitrationLoss));
        interface.release().done();
    }

    #[test]
    fn read_raw_reads_two_bytes_big_endian() {
        let mut expectations = startup_writes(0x23);
        expectations.push(I2cTransaction::read(0x23, vec![0xD5, 0x54]));
        let i2c = I2cMock::new(&expectations);
        let config = Config::new().with_address(Bh1750Address::Low);

        let mut driver = Bh1750::new_i2c(i2c, &mut NoopDelay::new(), config).expect("init");
        assert_eq!(driver.read_raw(), Ok(0xD554));
        driver.release().done();
    }

    #[test]
    fn read_raw_forwards_bus_error() {
        let mut expectations = startup_writes(0x23);
        expectations.push(I2cTransaction::read(0x23, vec![0, 0]).with_error(NACK));
        let i2c = I2cMock::new(&expectations);
        let config = Config::new().with_address(Bh1750Address::Low);

        let mut driver = Bh1750::new_i2c(i2c, &mut NoopDelay::new(), config).expect("init");
        assert_eq!(
            driver.read_raw(),
            Err(Error::Bus {
                operation: BusOperation::Read,
                source: NACK,
            })
        );
        driver.release().done();
    }

    #[test]
    fn async_scan_treats_nack_as_absent() {
        let mut expectations = scan_expectations(&[0x23]);
        expectations.extend(startup_writes(0x23));
        let i2c = I2cMock::new(&expectations);

        let driver = block_on(Bh1750Async::new_i2c(i2c, &mut NoopDelay::new(), Config::new()))
            .expect("init");
        assert_eq!(driver.address(), Bh1750Address::Low);
        driver.release().done();
    }

    #[test]
    fn async_scan_stops_on_bus_fault() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::read(SCAN_START_ADDR, vec![0]).with_error(ErrorKind::Bus),
        ]);

        let result = block_on(Bh1750Async::new_i2c(
            i2c.clone(),
            &mut NoopDelay::new(),
            Config::new(),
        ));
        assert_eq!(
            result.err(),
            Some(Error::Bus {
                operation: BusOperation::Scan,
                source: ErrorKind::Bus,
            })
        );
        i2c.done();
    }
}
