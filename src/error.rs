//! Error types for the ADC driver.

use core::fmt;

/// Errors that can occur when communicating with the ADC.
#[derive(Debug, PartialEq, Eq)]
pub enum AdcError<E> {
    /// Underlying I2C bus error — the last failure observed once the retry
    /// budget was exhausted.
    I2c(E),

    /// A caller-supplied argument was malformed (address outside 7 bits, or
    /// a write frame that is not 1 or 2 bytes). Detected before any bus
    /// traffic and never retried.
    InvalidArgument,

    /// An operation requiring a successfully initialised device was called
    /// on an uninitialised handle. Never retried.
    NotInitialized,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for AdcError<E> {
    fn from(error: E) -> Self {
        AdcError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for AdcError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdcError::I2c(e) => write!(f, "I2C error: {:?}", e),
            AdcError::InvalidArgument => write!(f, "Invalid argument"),
            AdcError::NotInitialized => write!(f, "Device not initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for AdcError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            AdcError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            AdcError::InvalidArgument => defmt::write!(f, "Invalid argument"),
            AdcError::NotInitialized => defmt::write!(f, "Device not initialized"),
        }
    }
}
