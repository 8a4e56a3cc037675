//! Fixed-point conversion helpers.

use super::scale::lux_scale;
use crate::config::{MeasurementMode, MeasurementTime};

/// Fixed-point number type used for lux conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Converts a raw count to lux without floating-point math.
pub fn lux_fixed(raw: u16, mode: MeasurementMode, mtreg: MeasurementTime) -> Fixed {
    let scale = lux_scale(mode, mtreg);
    // Largest numerator is 65535 * 690, well inside i32.
    Fixed::from_num(u32::from(raw) * scale.numerator) / Fixed::from_num(scale.denominator)
}
