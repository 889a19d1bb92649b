// src/lib.rs

//! Driver for the ROHM BH1750 ambient light sensor.
//!
//! The driver tracks when a conversion started and when its result becomes
//! valid, so callers can poll [`Bh1750::is_conversion_completed`] from their
//! own scheduler or block in [`Bh1750::wait_for_completion`].
//!
//! Bus and clock are injected through [`Bh1750Bus`] and [`Bh1750Clock`].
//! With the `impl-hal` feature, `HalBus` and `HalClock` adapt embedded-hal
//! I2C and delay implementations.
//!
//! # Freshness of readings
//!
//! [`Bh1750::read`] always returns whatever the sensor's data register holds.
//! Calling it before a conversion completes yields the previous result, or an
//! indeterminate value after power-up. The unchecked operations also swallow
//! transport errors; use the `try_*` variants to see them.

#![no_std]

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    raw_to_lux, Bh1750Addr, Bh1750Bus, Bh1750Clock, Bh1750Error, Config, Resolution,
    TriggerMode,
};
pub use driver::Bh1750;

#[cfg(feature = "impl-hal")]
pub use common::{HalBus, HalClock};
