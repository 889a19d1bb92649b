// src/driver/polling.rs

use super::Bh1750;
use crate::common::{
    error::Bh1750Error,
    hal_traits::{Bh1750Bus, Bh1750Clock},
    timing,
};

impl<B, C> Bh1750<B, C>
where
    B: Bh1750Bus,
    C: Bh1750Clock,
{
    /// Non-blocking completion check.
    ///
    /// `Ok(())` once the pending conversion is readable, `WouldBlock` while it
    /// is still running. Never touches the bus.
    pub fn poll_conversion(&mut self) -> nb::Result<(), Bh1750Error<B::Error>> {
        if self.config.is_none() {
            return Err(nb::Error::Other(Bh1750Error::NotConfigured));
        }
        let deadline = self
            .deadline
            .ok_or(nb::Error::Other(Bh1750Error::NoConversionPending))?;

        if deadline.has_elapsed(self.clock.now_ms()) {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// `true` once a started conversion has had its worst case time.
    ///
    /// `false` if unconfigured or nothing is pending. Only reads the clock,
    /// so it is safe to call as often as needed.
    pub fn is_conversion_completed(&mut self) -> bool {
        self.poll_conversion().is_ok()
    }

    /// Blocks until the pending conversion completes or the worst case
    /// conversion time plus a small margin has passed.
    ///
    /// Checks once per millisecond and returns `false` on timeout or when
    /// unconfigured. Not cancellable; poll `is_conversion_completed` from
    /// your own scheduler if you need that.
    pub fn wait_for_completion(&mut self) -> bool {
        let Some(config) = self.config else {
            return false;
        };

        for _ in 0..Self::wait_attempts(config.conversion_time_ms()) {
            if self.is_conversion_completed() {
                return true;
            }
            self.clock.delay_ms(timing::POLL_INTERVAL_MS);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("bh1750 {}: conversion wait timed out", self.address);
        false
    }

    /// Async form of [`wait_for_completion`](Self::wait_for_completion),
    /// yielding to the executor between checks through `delay`.
    #[cfg(feature = "async")]
    pub async fn wait_for_completion_async<D>(&mut self, delay: &mut D) -> bool
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let Some(config) = self.config else {
            return false;
        };

        for _ in 0..Self::wait_attempts(config.conversion_time_ms()) {
            if self.is_conversion_completed() {
                return true;
            }
            delay.delay_ms(timing::POLL_INTERVAL_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("bh1750 {}: conversion wait timed out", self.address);
        false
    }

    #[inline]
    fn wait_attempts(conversion_time_ms: u32) -> u32 {
        (conversion_time_ms + timing::WAIT_MARGIN_MS) / timing::POLL_INTERVAL_MS
    }
}
