// src/common/address.rs

use super::error::Bh1750Error;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of the sensor, selected by the level of its ADDR pin.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bh1750Addr {
    /// ADDR pin low or floating.
    #[default]
    Low,
    /// ADDR pin high.
    High,
}

impl Bh1750Addr {
    pub const LOW_ADDRESS: u8 = 0x23;
    pub const HIGH_ADDRESS: u8 = 0x5C;

    /// Picks the address for the given ADDR pin level.
    #[inline]
    pub const fn from_pin_level(address_pin_high: bool) -> Self {
        if address_pin_high {
            Bh1750Addr::High
        } else {
            Bh1750Addr::Low
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Bh1750Addr::Low => Self::LOW_ADDRESS,
            Bh1750Addr::High => Self::HIGH_ADDRESS,
        }
    }
}

impl TryFrom<u8> for Bh1750Addr {
    // Validation alone can't produce a bus error
    type Error = Bh1750Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Self::LOW_ADDRESS => Ok(Bh1750Addr::Low),
            Self::HIGH_ADDRESS => Ok(Bh1750Addr::High),
            other => Err(Bh1750Error::InvalidAddress(other)),
        }
    }
}

impl From<Bh1750Addr> for u8 {
    fn from(value: Bh1750Addr) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for Bh1750Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.as_u8())
    }
}
