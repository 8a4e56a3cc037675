extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs as BlockingDelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::interface::{AsyncInterface, Interface, ScanResult, sealed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MockError {
    Nack,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockInterface {
    present: ScanResult,
    read_data: [u8; 2],
    writes: Vec<(u8, u8)>,
    reads: Vec<u8>,
    scans: u32,
    write_budget: Option<usize>,
    fail_scan: bool,
    fail_reads: bool,
}

impl MockInterface {
    pub(crate) fn with_device(mut self, addr: u8) -> Self {
        self.present.insert(addr);
        self
    }

    pub(crate) fn with_read_data(mut self, data: [u8; 2]) -> Self {
        self.read_data = data;
        self
    }

    pub(crate) fn set_read_data(&mut self, data: [u8; 2]) {
        self.read_data = data;
    }

    /// Allows `count` more successful writes, then NACKs every write.
    pub(crate) fn fail_writes_after(&mut self, count: usize) {
        self.write_budget = Some(count);
    }

    pub(crate) fn with_failing_scan(mut self) -> Self {
        self.fail_scan = true;
        self
    }

    pub(crate) fn fail_reads(&mut self) {
        self.fail_reads = true;
    }

    /// Every byte written, with the address it was sent to.
    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Every byte written, without addresses.
    pub(crate) fn written_bytes(&self) -> Vec<u8> {
        self.writes.iter().map(|(_, byte)| *byte).collect()
    }

    pub(crate) fn clear_writes(&mut self) {
        self.writes.clear();
    }

    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub(crate) fn scans(&self) -> u32 {
        self.scans
    }

    fn do_scan(&mut self) -> Result<ScanResult, MockError> {
        self.scans += 1;
        if self.fail_scan {
            return Err(MockError::Nack);
        }
        Ok(self.present)
    }

    fn do_write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
        if let Some(budget) = self.write_budget.as_mut() {
            if *budget == 0 {
                return Err(MockError::Nack);
            }
            *budget -= 1;
        }
        self.writes.extend(data.iter().map(|byte| (address, *byte)));
        Ok(())
    }

    fn do_read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), MockError> {
        if self.fail_reads {
            return Err(MockError::Nack);
        }
        self.reads.push(address);
        for (slot, value) in buffer.iter_mut().zip(self.read_data) {
            *slot = value;
        }
        Ok(())
    }
}

impl Interface for MockInterface {
    type Error = MockError;

    fn scan(&mut self) -> Result<ScanResult, MockError> {
        self.do_scan()
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
        self.do_write(address, data)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), MockError> {
        self.do_read(address, buffer)
    }
}

impl AsyncInterface for MockInterface {
    type Error = MockError;

    async fn scan(&mut self) -> Result<ScanResult, MockError> {
        self.do_scan()
    }

    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
        self.do_write(address, data)
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), MockError> {
        self.do_read(address, buffer)
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) delays_ms: Vec<u32>,
}

impl BlockingDelayNs for MockDelay {
    // The driver only waits in whole milliseconds.
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

impl AsyncDelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
