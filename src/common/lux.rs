// src/common/lux.rs

/// Converts a raw 16-bit measurement to lux.
///
/// The datasheet gives 1.2 counts per lux at the default measurement time,
/// so `lux = raw / 1.2`, done here as `(raw * 10 + 5) / 12` to round to the
/// nearest integer without floating point. The result always fits in `u16`.
#[inline]
pub const fn raw_to_lux(raw: u16) -> u16 {
    ((raw as u32 * 10 + 5) / 12) as u16
}

/// Combines the two result bytes, high byte first.
#[inline]
pub const fn raw_from_bytes(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}
