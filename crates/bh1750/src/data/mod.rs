//! Measurement timing and raw-to-lux conversion.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{ScaleFactor, lux_scale};

use crate::config::{MeasurementMode, MeasurementTime};

/// Counts per lux at the default measurement time register (datasheet typ.).
pub(crate) const COUNTS_PER_LUX: f64 = 1.2;

/// Decodes the two result bytes (high byte first).
pub const fn raw_from_bytes(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Returns how long to wait for a fresh result, in milliseconds.
///
/// The worst-case time for the resolution scales linearly with the
/// measurement time register, relative to its default of 69.
pub const fn measurement_wait_ms(mode: MeasurementMode, mtreg: MeasurementTime) -> u32 {
    let base = mode.resolution().max_measurement_ms();
    base * mtreg.get() as u32 / MeasurementTime::DEFAULT.get() as u32
}

/// Converts a raw count to lux.
///
/// `lux = raw / 1.2 * (69 / mtreg)`, halved in H-resolution mode 2.
pub fn lux(raw: u16, mode: MeasurementMode, mtreg: MeasurementTime) -> f64 {
    let scale = f64::from(MeasurementTime::DEFAULT.get()) / f64::from(mtreg.get());
    let lux = (f64::from(raw) / COUNTS_PER_LUX) * scale;
    lux / f64::from(mode.resolution().divisor())
}
