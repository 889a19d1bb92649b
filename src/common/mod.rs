// src/common/mod.rs

pub mod address;
pub mod error;
pub mod hal_traits;
pub mod instruction;
pub mod lux;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::Bh1750Addr;

// From error.rs
pub use error::Bh1750Error;

// From hal_traits.rs
pub use hal_traits::{Bh1750Bus, Bh1750Clock};

// From instruction.rs
pub use instruction::{Config, Instruction, Resolution, TriggerMode};

// From lux.rs
pub use lux::raw_to_lux;

// Timing constants stay under common::timing::*

// --- Feature-gated re-exports ---

// embedded-hal adapters (from hal_traits.rs)
#[cfg(feature = "impl-hal")]
pub use hal_traits::{HalBus, HalClock};
