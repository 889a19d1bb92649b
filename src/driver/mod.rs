// src/driver/mod.rs

use crate::common::{
    address::Bh1750Addr,
    error::Bh1750Error,
    hal_traits::{Bh1750Bus, Bh1750Clock},
    instruction::{Config, Instruction, Resolution, TriggerMode},
    lux,
};

mod polling;

#[cfg(test)]
mod mock;

/// When an in-flight conversion becomes readable.
///
/// Kept as a start time plus duration so the check survives the millisecond
/// counter wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Deadline {
    started_at: u32,
    duration_ms: u32,
}

impl Deadline {
    #[inline]
    fn expires_at(&self) -> u32 {
        self.started_at.wrapping_add(self.duration_ms)
    }

    #[inline]
    fn has_elapsed(&self, now: u32) -> bool {
        now.wrapping_sub(self.started_at) >= self.duration_ms
    }
}

/// BH1750 driver.
///
/// Lifecycle: unconfigured until [`configure`](Self::configure); then
/// powered down until [`start_conversion`](Self::start_conversion); then
/// converting until the worst case conversion time has passed. A one-shot
/// [`read`](Self::read) drops back to powered down, a continuous one re-arms
/// the completion deadline. [`power_down`](Self::power_down) returns to
/// powered down from anywhere.
///
/// Calls on an unconfigured driver are no-ops returning `0` or `false`.
#[derive(Debug)]
pub struct Bh1750<B, C>
where
    B: Bh1750Bus,
    C: Bh1750Clock,
{
    bus: B,
    clock: C,
    address: Bh1750Addr,
    config: Option<Config>,
    deadline: Option<Deadline>,
}

impl<B, C> Bh1750<B, C>
where
    B: Bh1750Bus,
    C: Bh1750Clock,
{
    /// Creates a driver for the sensor whose ADDR pin is at the given level.
    /// No bus traffic.
    pub fn new(bus: B, clock: C, address_pin_high: bool) -> Self {
        Self::with_address(bus, clock, Bh1750Addr::from_pin_level(address_pin_high))
    }

    pub fn with_address(bus: B, clock: C, address: Bh1750Addr) -> Self {
        Bh1750 {
            bus,
            clock,
            address,
            config: None,
            deadline: None,
        }
    }

    /// Gives back the bus and clock.
    pub fn release(self) -> (B, C) {
        (self.bus, self.clock)
    }

    #[inline]
    pub fn address(&self) -> Bh1750Addr {
        self.address
    }

    /// The stored configuration, `None` until `configure` is called.
    #[inline]
    pub fn config(&self) -> Option<Config> {
        self.config
    }

    /// Counter value at which the pending conversion becomes readable.
    #[inline]
    pub fn pending_deadline(&self) -> Option<u32> {
        self.deadline.map(|d| d.expires_at())
    }

    // --- Configuration ---

    /// Stores trigger mode and resolution and powers the sensor down.
    ///
    /// Must be called before any conversion can start. Calling it again
    /// replaces the configuration and drops any pending conversion. The mode
    /// itself is only sent by `start_conversion`.
    pub fn configure(&mut self, trigger: TriggerMode, resolution: Resolution) {
        self.configure_with(Config::new(trigger, resolution));
    }

    pub fn configure_with(&mut self, config: Config) {
        let _ = self.try_configure_with(config);
    }

    /// Like [`configure`](Self::configure) but reports bus errors. The
    /// configuration is stored even if the power-down write fails.
    pub fn try_configure(
        &mut self,
        trigger: TriggerMode,
        resolution: Resolution,
    ) -> Result<(), Bh1750Error<B::Error>> {
        self.try_configure_with(Config::new(trigger, resolution))
    }

    pub fn try_configure_with(&mut self, config: Config) -> Result<(), Bh1750Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("bh1750 {}: configure {}", self.address, config);
        self.config = Some(config);
        self.try_power_down()
    }

    // --- Power ---

    /// Drops any pending conversion and powers the sensor down.
    ///
    /// The configuration is kept; `start_conversion` powers the sensor up again.
    pub fn power_down(&mut self) {
        let _ = self.try_power_down();
    }

    pub fn try_power_down(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        self.deadline = None;
        self.write_instruction(Instruction::PowerDown)
    }

    /// Sends the power-on instruction. Leaves configuration and timing alone.
    pub fn power_on(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        self.write_instruction(Instruction::PowerOn)
    }

    /// Clears the sensor's data register. Only accepted by the sensor while
    /// powered on, so pair it with [`power_on`](Self::power_on).
    pub fn reset(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        self.write_instruction(Instruction::Reset)
    }

    // --- Conversion ---

    /// Powers the sensor up and starts a conversion with the stored
    /// configuration. Does nothing, not even bus traffic, if unconfigured.
    pub fn start_conversion(&mut self) {
        let _ = self.try_start_conversion();
    }

    /// Like [`start_conversion`](Self::start_conversion) but reports errors.
    /// The deadline is armed even if the bus write fails.
    pub fn try_start_conversion(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        let config = self.config.ok_or(Bh1750Error::NotConfigured)?;
        let result = self.write_instruction(Instruction::Measure(config));
        self.arm_deadline(config);
        result
    }

    /// Reads the light level in lux (0..=65535).
    ///
    /// This does not check that a conversion has completed. Confirm with
    /// [`is_conversion_completed`](Self::is_conversion_completed) or
    /// [`wait_for_completion`](Self::wait_for_completion) first, otherwise
    /// the value may be stale or indeterminate. The sensor also returns the
    /// last value while powered down.
    ///
    /// In one-shot mode the pending deadline is cleared and
    /// `start_conversion` has to be called before the next reading. In
    /// continuous mode the deadline is re-armed, estimating when the
    /// free-running sensor has its next result.
    ///
    /// Returns `0` if unconfigured, and also if the bus read fails.
    pub fn read(&mut self) -> u16 {
        self.try_read().unwrap_or(0)
    }

    /// Like [`read`](Self::read) but reports errors. The same freshness
    /// caveat applies.
    pub fn try_read(&mut self) -> Result<u16, Bh1750Error<B::Error>> {
        self.try_read_raw().map(lux::raw_to_lux)
    }

    /// Reads the raw measurement counts, with the same state effects as `read`.
    pub fn try_read_raw(&mut self) -> Result<u16, Bh1750Error<B::Error>> {
        let config = self.config.ok_or(Bh1750Error::NotConfigured)?;

        match config.trigger {
            TriggerMode::OneShot => self.deadline = None,
            TriggerMode::Continuous => self.arm_deadline(config),
        }

        let mut buf = [0u8; 2];
        self.bus.read(self.address.as_u8(), &mut buf)?;
        Ok(lux::raw_from_bytes(buf))
    }

    // --- Private helpers ---

    fn arm_deadline(&mut self, config: Config) {
        let deadline = Deadline {
            started_at: self.clock.now_ms(),
            duration_ms: config.conversion_time_ms(),
        };
        #[cfg(feature = "defmt")]
        defmt::trace!("bh1750 {}: result due at {=u32} ms", self.address, deadline.expires_at());
        self.deadline = Some(deadline);
    }

    fn write_instruction(&mut self, instruction: Instruction) -> Result<(), Bh1750Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("bh1750 {}: write {=u8:#x}", self.address, instruction.opcode());
        self.bus
            .write(self.address.as_u8(), &[instruction.opcode()])
            .map_err(Bh1750Error::Io)
    }
}
