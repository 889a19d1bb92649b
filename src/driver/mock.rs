// src/driver/mock.rs

//! Simulated bus and clock for driver tests.

use crate::common::hal_traits::{Bh1750Bus, Bh1750Clock};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct SimBusError;

/// Records every write as `(address, byte)` and answers reads with `next_read`.
#[derive(Debug)]
pub(crate) struct SimBus {
    pub writes: heapless::Vec<(u8, u8), 64>,
    pub reads: u32,
    pub next_read: [u8; 2],
    pub fail: bool,
}

impl SimBus {
    pub fn new() -> Self {
        SimBus {
            writes: heapless::Vec::new(),
            reads: 0,
            next_read: [0, 0],
            fail: false,
        }
    }
}

impl Bh1750Bus for SimBus {
    type Error = SimBusError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(SimBusError);
        }
        for byte in bytes {
            self.writes
                .push((address, *byte))
                .expect("write log full");
        }
        Ok(())
    }

    fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(SimBusError);
        }
        self.reads += 1;
        buffer.copy_from_slice(&self.next_read[..buffer.len()]);
        Ok(())
    }
}

/// Clock that only moves when a test moves it, or on each delay when
/// `advance_on_delay` is set.
#[derive(Debug)]
pub(crate) struct SimClock {
    pub now: u32,
    pub delays: u32,
    pub delayed_ms: u32,
    pub advance_on_delay: bool,
}

impl SimClock {
    pub fn new() -> Self {
        SimClock {
            now: 0,
            delays: 0,
            delayed_ms: 0,
            advance_on_delay: false,
        }
    }
}

impl Bh1750Clock for SimClock {
    fn now_ms(&mut self) -> u32 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays += 1;
        self.delayed_ms += ms;
        if self.advance_on_delay {
            self.now = self.now.wrapping_add(ms);
        }
    }
}
