// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the two-wire bus transactions the sensor needs.
///
/// Every instruction is a single-byte write; a measurement result is a
/// two-byte read. Addresses are 7-bit, without the R/W bit.
pub trait Bh1750Bus {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Writes `bytes` to the device at `address` in one transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Reads exactly `buffer.len()` bytes from the device at `address`.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Abstraction for the monotonic millisecond clock and blocking delay.
///
/// `now_ms` is expected to wrap at `u32::MAX`; the driver only ever looks
/// at wrapping differences between two readings.
pub trait Bh1750Clock {
    /// Current value of the millisecond counter.
    fn now_ms(&mut self) -> u32;

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Bh1750Bus + ?Sized> Bh1750Bus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buffer)
    }
}

impl<T: Bh1750Clock + ?Sized> Bh1750Clock for &mut T {
    fn now_ms(&mut self) -> u32 {
        T::now_ms(self)
    }

    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

/// Makes any `embedded_hal::i2c::I2c` usable as the sensor bus.
///
/// Requires `embedded-hal` v1.0 traits.
#[cfg(feature = "impl-hal")]
#[derive(Debug)]
pub struct HalBus<I2C> {
    i2c: I2C,
}

#[cfg(feature = "impl-hal")]
impl<I2C> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        HalBus { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "impl-hal")]
impl<I2C: embedded_hal::i2c::I2c> Bh1750Bus for HalBus<I2C> {
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer)
    }
}

/// Pairs an `embedded_hal::delay::DelayNs` with a millisecond counter.
///
/// embedded-hal has no clock trait, so the counter is supplied as a closure,
/// typically reading a HAL timer: `HalClock::new(delay, || timer.now_ms())`.
#[cfg(feature = "impl-hal")]
pub struct HalClock<D, F> {
    delay: D,
    now: F,
}

#[cfg(feature = "impl-hal")]
impl<D, F> HalClock<D, F>
where
    D: embedded_hal::delay::DelayNs,
    F: FnMut() -> u32,
{
    pub fn new(delay: D, now: F) -> Self {
        HalClock { delay, now }
    }

    pub fn release(self) -> (D, F) {
        (self.delay, self.now)
    }
}

#[cfg(feature = "impl-hal")]
impl<D, F> Bh1750Clock for HalClock<D, F>
where
    D: embedded_hal::delay::DelayNs,
    F: FnMut() -> u32,
{
    fn now_ms(&mut self) -> u32 {
        (self.now)()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms)
    }
}
