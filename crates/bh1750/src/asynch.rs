//! Async BH1750 driver.
//!
//! Same protocol as [`Bh1750`](crate::Bh1750); delays are awaited instead
//! of spun, so other tasks run while a measurement integrates.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::command::{COMMAND_DELAY_MS, Command};
use crate::config::{Config, MeasurementMode, MeasurementTime};
use crate::device::DeviceCore;
use crate::error::{BusOperation, Error};
use crate::interface::{AsyncInterface, Bh1750Address, I2cInterface};

/// BH1750 ambient light sensor driver (async).
pub struct Bh1750Async<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the async driver.
pub type Bh1750AsyncI2c<I2C> = Bh1750Async<I2cInterface<I2C>>;

impl<I2C> Bh1750Async<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates an I2C-based driver and configures the sensor.
    pub async fn new_i2c<D: DelayNs>(
        i2c: I2C,
        delay: &mut D,
        config: Config,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::new(I2cInterface::new(i2c), delay, config).await
    }
}

impl<I2C> Bh1750Async<I2cInterface<I2C>> {
    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Bh1750Async<I> {
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

impl<I> Bh1750Async<I>
where
    I: AsyncInterface,
{
    /// Creates a driver over `interface` and configures the sensor.
    pub async fn new<D: DelayNs>(
        mut interface: I,
        delay: &mut D,
        config: Config,
    ) -> Result<Self, Error<I::Error>> {
        let address = match config.address {
            Some(address) => address,
            None => {
                let present = interface
                    .scan()
                    .await
                    .map_err(|source| Error::bus(BusOperation::Scan, source))?;
                Bh1750Address::detect(&present).ok_or(Error::NotPresent)?
            }
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("bh1750: using address {=u8:#04x}", address.addr());

        let mut driver = Self {
            core: DeviceCore::new(interface, address, config.mode),
        };
        driver.power_on(delay).await?;
        driver.reset(delay).await?;
        driver
            .apply_measurement_time(config.measurement_time)
            .await?;
        driver.set_mode_forced(config.mode).await?;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "bh1750: configured {} mtreg={=u8}",
            config.mode,
            config.measurement_time.get()
        );
        Ok(driver)
    }

    /// Powers the sensor on and waits for it to settle.
    pub async fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        self.send(Command::PowerOn.opcode()).await?;
        delay.delay_ms(COMMAND_DELAY_MS).await;
        Ok(())
    }

    /// Powers the sensor down.
    pub async fn power_down(&mut self) -> Result<(), Error<I::Error>> {
        self.send(Command::PowerDown.opcode()).await
    }

    /// Clears the data register and waits for it to settle.
    pub async fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>> {
        self.send(Command::Reset.opcode()).await?;
        delay.delay_ms(COMMAND_DELAY_MS).await;
        Ok(())
    }

    /// Sets the measurement time register, clamping into `31..=254`.
    pub async fn set_measurement_time(&mut self, value: i32) -> Result<(), Error<I::Error>> {
        self.apply_measurement_time(MeasurementTime::new(value))
            .await
    }

    /// Selects `mode`, skipping the write if it is already active.
    pub async fn set_mode(&mut self, mode: MeasurementMode) -> Result<(), Error<I::Error>> {
        self.write_mode(mode, false).await
    }

    /// Selects `mode`, always writing it.
    pub async fn set_mode_forced(&mut self, mode: MeasurementMode) -> Result<(), Error<I::Error>> {
        self.write_mode(mode, true).await
    }

    /// Reads the raw 16-bit result register.
    pub async fn read_raw(&mut self) -> Result<u16, Error<I::Error>> {
        let (interface, address, buffer) = self.core.stage_read();
        interface
            .read(address, buffer)
            .await
            .map_err(|source| Error::bus(BusOperation::Read, source))?;
        Ok(self.core.raw())
    }

    /// Measures illuminance in lux.
    ///
    /// Dropping the future mid-wait leaves the sensor measuring; the next
    /// call starts over.
    pub async fn read_lux<D: DelayNs>(&mut self, delay: &mut D) -> Result<f64, Error<I::Error>> {
        let mode = self.core.mode();
        if mode.is_one_shot() {
            self.set_mode_forced(mode).await?;
        }
        delay.delay_ms(self.core.measurement_delay_ms()).await;
        let raw = self.read_raw().await?;
        Ok(self.core.lux(raw))
    }

    async fn apply_measurement_time(
        &mut self,
        value: MeasurementTime,
    ) -> Result<(), Error<I::Error>> {
        let [high, low] = value.command_bytes();
        self.send(high).await?;
        self.send(low).await?;
        self.core.commit_measurement_time(value);
        Ok(())
    }

    async fn write_mode(
        &mut self,
        mode: MeasurementMode,
        force: bool,
    ) -> Result<(), Error<I::Error>> {
        if !self.core.mode_write_needed(mode, force) {
            return Ok(());
        }
        self.send(mode.opcode()).await?;
        self.core.commit_mode(mode);
        Ok(())
    }

    async fn send(&mut self, opcode: u8) -> Result<(), Error<I::Error>> {
        let (interface, address, data) = self.core.stage_write(opcode);
        #[cfg(feature = "defmt")]
        defmt::trace!("bh1750: write {=u8:#04x} to {=u8:#04x}", opcode, address);
        interface
            .write(address, data)
            .await
            .map_err(|source| Error::bus(BusOperation::Write(opcode), source))
    }
}
