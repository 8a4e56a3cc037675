//! Device state shared by the blocking and async drivers.
//!
//! The bus sequences live in the drivers; this module owns what the device
//! is believed to hold and only updates it once a transfer has succeeded.

use crate::config::{MeasurementMode, MeasurementTime};
use crate::data::{lux, measurement_wait_ms, raw_from_bytes};
use crate::interface::Bh1750Address;

pub(crate) struct DeviceCore<I> {
    interface: I,
    address: Bh1750Address,
    mode: MeasurementMode,
    measurement_time: MeasurementTime,
    write_buf: [u8; 1],
    read_buf: [u8; 2],
}

impl<I> DeviceCore<I> {
    pub(crate) const fn new(interface: I, address: Bh1750Address, mode: MeasurementMode) -> Self {
        Self {
            interface,
            address,
            mode,
            measurement_time: MeasurementTime::DEFAULT,
            write_buf: [0u8; 1],
            read_buf: [0u8; 2],
        }
    }

    pub(crate) const fn address(&self) -> Bh1750Address {
        self.address
    }

    pub(crate) const fn mode(&self) -> MeasurementMode {
        self.mode
    }

    pub(crate) const fn measurement_time(&self) -> MeasurementTime {
        self.measurement_time
    }

    /// Returns false when `mode` is already active and the write may be skipped.
    pub(crate) fn mode_write_needed(&self, mode: MeasurementMode, force: bool) -> bool {
        force || self.mode != mode
    }

    pub(crate) fn commit_mode(&mut self, mode: MeasurementMode) {
        self.mode = mode;
    }

    pub(crate) fn commit_measurement_time(&mut self, value: MeasurementTime) {
        self.measurement_time = value;
    }

    pub(crate) const fn measurement_delay_ms(&self) -> u32 {
        measurement_wait_ms(self.mode, self.measurement_time)
    }

    /// Loads `opcode` into the write buffer and hands out what a write needs.
    pub(crate) fn stage_write(&mut self, opcode: u8) -> (&mut I, u8, &[u8]) {
        self.write_buf[0] = opcode;
        (&mut self.interface, self.address.addr(), &self.write_buf)
    }

    /// Hands out the read buffer for a result transfer.
    pub(crate) fn stage_read(&mut self) -> (&mut I, u8, &mut [u8]) {
        (&mut self.interface, self.address.addr(), &mut self.read_buf)
    }

    /// Decodes the last completed result transfer.
    pub(crate) const fn raw(&self) -> u16 {
        raw_from_bytes(self.read_buf)
    }

    pub(crate) fn lux(&self, raw: u16) -> f64 {
        lux(raw, self.mode, self.measurement_time)
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}
