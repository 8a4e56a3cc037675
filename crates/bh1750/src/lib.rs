//! `#![no_std]` driver for the
//! [BH1750](https://www.mouser.com/datasheet/2/348/bh1750fvi-e-186247.pdf)
//! ambient light sensor from ROHM.
//!
//! The driver is built on the `embedded-hal` 1.0 traits. [`Bh1750`] blocks
//! for every transfer and protocol delay; [`Bh1750Async`] runs the same
//! protocol on `embedded-hal-async`.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_bh1750::{Bh1750I2c, Config, MeasurementMode};
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::I2c;
//! #
//! # fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_bh1750::Error<I2C::Error>> {
//! let config = Config::new().with_mode(MeasurementMode::OneTimeHighResolution);
//! let mut sensor: Bh1750I2c<I2C> = Bh1750I2c::new_i2c(i2c, delay, config)?;
//! let lux = sensor.read_lux(delay)?;
//! # let _ = lux;
//! # Ok(())
//! # }
//! ```
//!
//! # Addressing
//!
//! The ADDR strap selects 0x23 (low or floating) or 0x5C (high). Leave
//! [`Config::address`] unset to scan the bus; 0x23 wins if both answer.
//!
//! # Modes and timing
//!
//! One-time modes are re-triggered by every [`Bh1750::read_lux`] call.
//! Each read waits the worst-case measurement time for its resolution
//! (180 ms high, 24 ms low) scaled by `mtreg / 69`.
//!
//! # Conversion helpers
//!
//! [`lux`] converts raw counts with floating-point math. [`lux_scale`]
//! returns the same conversion as an integer [`ScaleFactor`]; with the
//! `fixed` feature, `lux_fixed` returns an `I32F32`.
//!
//! # Features
//!
//! - **`defmt`**: derive `defmt::Format` on public types and log bus traffic.
//! - **`fixed`**: fixed-point lux conversion.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::float_cmp
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

mod asynch;
mod command;
mod config;
mod data;
mod device;
mod driver;
mod error;
mod interface;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::{AsyncInterface, Interface};
pub use interface::{Bh1750Address, I2cInterface};
pub use interface::{SCAN_END_ADDR, SCAN_START_ADDR, ScanResult};

// Configuration
pub use config::{Config, MeasurementMode, MeasurementTime, Resolution};

// Drivers
pub use asynch::{Bh1750Async, Bh1750AsyncI2c};
pub use driver::{Bh1750, Bh1750I2c};

// Conversions
pub use data::{ScaleFactor, lux, lux_scale, measurement_wait_ms, raw_from_bytes};

pub use error::{BusOperation, Error};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{Fixed, lux_fixed};
