// src/common/error.rs

/// Errors reported by the checked (`try_*`) driver operations.
///
/// The unchecked operations never return these; they degrade to no-ops or
/// zero readings instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bh1750Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying bus error from the transport implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// `configure` has not been called yet.
    #[error("Sensor not configured")]
    NotConfigured,

    /// No conversion has been started since power-down or the last one-shot read.
    #[error("No conversion pending")]
    NoConversionPending,

    /// Raw value is not one of the two sensor addresses.
    #[error("Invalid BH1750 address: {0:#04x}")]
    InvalidAddress(u8),
}

impl<E: core::fmt::Debug> From<E> for Bh1750Error<E> {
    fn from(e: E) -> Self {
        Bh1750Error::Io(e)
    }
}
