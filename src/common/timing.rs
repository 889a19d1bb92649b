// src/common/timing.rs

// Worst case values from the BH1750FVI datasheet, Electrical Characteristics.
// Typical values are 16 ms and 120 ms; the driver always waits for the worst case.

/// Maximum conversion time in low resolution mode.
pub const CONVERSION_TIME_LOW_MS: u32 = 24;
/// Maximum conversion time in mid and high resolution modes.
pub const CONVERSION_TIME_HIGH_MS: u32 = 180;

// === Blocking wait ===

/// Extra time granted by `wait_for_completion` beyond the conversion time.
pub const WAIT_MARGIN_MS: u32 = 2;
/// Delay between completion checks in `wait_for_completion`.
pub const POLL_INTERVAL_MS: u32 = 1;
