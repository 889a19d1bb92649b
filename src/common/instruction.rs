// src/common/instruction.rs

//! BH1750 instruction set.
//!
//! Every instruction is a single byte written to the sensor address. The
//! measurement instructions combine a trigger mode (bits `0x30`) and a
//! resolution (bits `0x03`); see the BH1750FVI datasheet, "Instruction Set
//! Architecture".

use super::timing;

pub const POWER_DOWN: u8 = 0x00;
pub const POWER_ON: u8 = 0x01;
pub const RESET: u8 = 0x07;

pub const MODE_MASK: u8 = 0x30;
pub const RESOLUTION_MASK: u8 = 0x03;

/// Whether the sensor converts continuously or once per request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerMode {
    /// Repeated automatic conversions. Draws more power.
    #[default]
    Continuous,
    /// A single conversion, after which the sensor drops to power-down.
    OneShot,
}

impl TriggerMode {
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            TriggerMode::Continuous => 0x10,
            TriggerMode::OneShot => 0x20,
        }
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & MODE_MASK {
            0x10 => Some(TriggerMode::Continuous),
            0x20 => Some(TriggerMode::OneShot),
            _ => None,
        }
    }
}

/// Measurement step size. Finer resolutions take longer to convert.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// ~4 lx per step, 24 ms worst case.
    Low,
    /// ~1 lx per step, 180 ms worst case.
    #[default]
    Mid,
    /// ~0.5 lx per step, 180 ms worst case. The last digit of the reading is the remainder.
    High,
}

impl Resolution {
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Resolution::Low => 0x03,
            Resolution::Mid => 0x00,
            Resolution::High => 0x01,
        }
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & RESOLUTION_MASK {
            0x03 => Some(Resolution::Low),
            0x00 => Some(Resolution::Mid),
            0x01 => Some(Resolution::High),
            _ => None,
        }
    }

    /// Worst case time from a measurement instruction to a valid result.
    #[inline]
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            Resolution::Low => timing::CONVERSION_TIME_LOW_MS,
            Resolution::Mid | Resolution::High => timing::CONVERSION_TIME_HIGH_MS,
        }
    }
}

/// Trigger mode and resolution, packed into one byte only when sent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub trigger: TriggerMode,
    pub resolution: Resolution,
}

impl Config {
    pub const fn new(trigger: TriggerMode, resolution: Resolution) -> Self {
        Config { trigger, resolution }
    }

    /// The measurement instruction byte for this configuration.
    #[inline]
    pub const fn mode_byte(&self) -> u8 {
        (self.trigger.bits() & MODE_MASK) | (self.resolution.bits() & RESOLUTION_MASK)
    }

    /// Decodes a measurement instruction byte. Returns `None` for bytes with
    /// no trigger mode bits set (power-down, power-on, reset) or an unused
    /// resolution code.
    pub const fn from_mode_byte(byte: u8) -> Option<Self> {
        if byte & !(MODE_MASK | RESOLUTION_MASK) != 0 {
            return None;
        }
        let trigger = match TriggerMode::from_bits(byte) {
            Some(t) => t,
            None => return None,
        };
        match Resolution::from_bits(byte) {
            Some(resolution) => Some(Config { trigger, resolution }),
            None => None,
        }
    }

    #[inline]
    pub const fn conversion_time_ms(&self) -> u32 {
        self.resolution.conversion_time_ms()
    }
}

/// A single-byte instruction understood by the sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    PowerDown,
    PowerOn,
    /// Clears the data register. Only valid while powered on.
    Reset,
    /// Powers the sensor up and starts a conversion.
    Measure(Config),
}

impl Instruction {
    #[inline]
    pub const fn opcode(&self) -> u8 {
        match self {
            Instruction::PowerDown => POWER_DOWN,
            Instruction::PowerOn => POWER_ON,
            Instruction::Reset => RESET,
            Instruction::Measure(config) => config.mode_byte(),
        }
    }
}
