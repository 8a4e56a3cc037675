//! Blocking BH1750 driver.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::command::{COMMAND_DELAY_MS, Command};
use crate::config::{Config, MeasurementMode, MeasurementTime};
use crate::device::DeviceCore;
use crate::error::{BusOperation, Error};
use crate::interface::{Bh1750Address, I2cInterface, Interface};

/// BH1750 ambient light sensor driver (blocking).
///
/// Construction powers the sensor on, resets it and applies the
/// [`Config`]. Every later call blocks until its bus transfers and
/// protocol delays have finished. The driver holds no lock; share it
/// between contexts behind a mutex.
pub struct Bh1750<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the blocking driver.
pub type Bh1750I2c<I2C> = Bh1750<I2cInterface<I2C>>;

impl<I2C> Bh1750<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates an I2C-based driver and configures the sensor.
    pub fn new_i2c<D: DelayNs>(
        i2c: I2C,
        delay: &mut D,
        config: Config,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::new(I2cInterface::new(i2c), delay, config)
    }
}

impl<I2C> Bh1750<I2cInterface<I2C>> {
    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Bh1750<I> {
    /// Returns the device address in use.
    pub const fn address(&self) -> Bh1750Address {
        self.core.address()
    }

    /// Returns the last successfully written measurement mode.
    pub const fn mode(&self) -> MeasurementMode {
        self.core.mode()
    }

    /// Returns the last successfully written measurement time register.
    pub const fn measurement_time(&self) -> MeasurementTime {
        self.core.measurement_time()
    }

    /// Returns how long [`read_lux`](Self::read_lux) waits before reading, in milliseconds.
    pub const fn measurement_delay_ms(&self) -> u32 {
        self.core.measurement_delay_ms()
    }
}

impl<I> Bh1750<I>
where
    I: Interface,
{
    /// Creates a driver over `interface` and configures the sensor.
    ///
    /// Without a configured address the bus is scanned first. The sequence
    /// is power-on, reset, measurement time, then an unconditional mode write.
    pub fn new<D: DelayNs>(
        mut interface: I,
        delay: &mut D,
        config: Config,
    ) -> Result<Self, Error<I::Error>> {
        let address = match config.address {
            Some(address) => address,
            None => detect_address(&mut interface)?,
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("bh1750: using address {=u8:#04x}", address.addr());

        let mut driver = Self {
            core: DeviceCore::new(interface, address, config.mode),
        };
        driver.power_on(delay)?;
        driver.reset(delay)?;
        driver.apply_measurement_time(config.measurement_time)?;
        driver.set_mode_forced(config.mode)?;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "bh1750: configured {} mtreg={=u8}",
            config.mode,
            config.measurement_time.get()
        );
        Ok(driver)
    }

    /// Powers the sensor on and waits for it to settle.
    pub fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        self.send(Command::PowerOn.opcode())?;
        delay.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Powers the sensor down.
    pub fn power_down(&mut self) -> Result<(), Error<I::Error>> {
        self.send(Command::PowerDown.opcode())
    }

    /// Clears the data register and waits for it to settle.
    ///
    /// The sensor ignores this while powered down.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        self.send(Command::Reset.opcode())?;
        delay.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Sets the measurement time register, clamping into `31..=254`.
    ///
    /// Both bytes are always sent. The stored value only changes once both
    /// writes succeeded.
    pub fn set_measurement_time(&mut self, value: i32) -> Result<(), Error<I::Error>> {
        self.apply_measurement_time(MeasurementTime::new(value))
    }

    /// Selects `mode`, skipping the write if it is already active.
    pub fn set_mode(&mut self, mode: MeasurementMode) -> Result<(), Error<I::Error>> {
        self.write_mode(mode, false)
    }

    /// Selects `mode`, always writing it.
    ///
    /// In a one-time mode this starts a new measurement.
    pub fn set_mode_forced(&mut self, mode: MeasurementMode) -> Result<(), Error<I::Error>> {
        self.write_mode(mode, true)
    }

    /// Reads the raw 16-bit result register.
    pub fn read_raw(&mut self) -> Result<u16, Error<I::Error>> {
        let (interface, address, buffer) = self.core.stage_read();
        interface
            .read(address, buffer)
            .map_err(|source| Error::bus(BusOperation::Read, source))?;
        Ok(self.core.raw())
    }

    /// Measures illuminance in lux.
    ///
    /// One-time modes are re-triggered on every call. The call then waits
    /// the worst-case measurement time for the current mode and measurement
    /// time register before reading.
    pub fn read_lux<D: DelayNs>(&mut self, delay: &mut D) -> Result<f64, Error<I::Error>> {
        let mode = self.core.mode();
        if mode.is_one_shot() {
            self.set_mode_forced(mode)?;
        }
        delay.delay_ms(self.core.measurement_delay_ms());
        let raw = self.read_raw()?;
        Ok(self.core.lux(raw))
    }

    fn apply_measurement_time(&mut self, value: MeasurementTime) -> Result<(), Error<I::Error>> {
        let [high, low] = value.command_bytes();
        self.send(high)?;
        self.send(low)?;
        self.core.commit_measurement_time(value);
        Ok(())
    }

    fn write_mode(&mut self, mode: MeasurementMode, force: bool) -> Result<(), Error<I::Error>> {
        if !self.core.mode_write_needed(mode, force) {
            return Ok(());
        }
        self.send(mode.opcode())?;
        self.core.commit_mode(mode);
        Ok(())
    }

    fn send(&mut self, opcode: u8) -> Result<(), Error<I::Error>> {
        let (interface, address, data) = self.core.stage_write(opcode);
        #[cfg(feature = "defmt")]
        defmt::trace!("bh1750: write {=u8:#04x} to {=u8:#04x}", opcode, address);
        interface
            .write(address, data)
            .map_err(|source| Error::bus(BusOperation::Write(opcode), source))
    }
}

fn detect_address<I: Interface>(interface: &mut I) -> Result<Bh1750Address, Error<I::Error>> {
    let present = interface
        .scan()
        .map_err(|source| Error::bus(BusOperation::Scan, source))?;
    Bh1750Address::detect(&present).ok_or(Error::NotPresent)
}
