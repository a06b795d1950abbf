//! Low-level I2C transport with bounded retries.
//!
//! Conversions on the LTC2499 occasionally NAK a transaction while a
//! conversion is still in progress, so every transfer runs under a
//! fixed-backoff retry loop bounded by [`RetryPolicy`].
//!
//! This module is crate-private — consumers interact with [`Ltc2499`]
//! in `adc.rs` instead.
//!
//! [`Ltc2499`]: crate::Ltc2499

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::registers::{ADDRESS_SENTINEL, MAX_OPERATION_TIMEOUT_MS, RETRY_DELAY_MS};

/// Bounded fixed-backoff retry policy for bus transactions.
///
/// Each failed attempt is followed by a blocking delay of
/// `attempt_delay_ms`; the loop gives up once the accumulated delay would
/// reach `max_elapsed_ms`, returning the last bus error observed. No
/// exponential backoff, no jitter — deterministic on purpose.
///
/// The default policy retries every 100 ms for up to 5 s. Tests inject a
/// smaller budget (and a no-op delay) to keep retry paths fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Delay between attempts, in milliseconds.
    pub attempt_delay_ms: u32,
    /// Total delay budget for one operation, in milliseconds.
    pub max_elapsed_ms: u32,
}

impl RetryPolicy {
    /// Create a retry policy from an inter-attempt delay and a total budget.
    pub const fn new(attempt_delay_ms: u32, max_elapsed_ms: u32) -> Self {
        Self {
            attempt_delay_ms,
            max_elapsed_ms,
        }
    }

    /// Upper bound on transfer attempts: `max_elapsed / attempt_delay`,
    /// never less than one.
    pub const fn max_attempts(&self) -> u32 {
        let delay = if self.attempt_delay_ms == 0 {
            1
        } else {
            self.attempt_delay_ms
        };
        let attempts = self.max_elapsed_ms / delay;
        if attempts == 0 {
            1
        } else {
            attempts
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_DELAY_MS, MAX_OPERATION_TIMEOUT_MS)
    }
}

/// Low-level transport owning the bus peripheral, the delay provider, and
/// the currently recorded device address.
pub(crate) struct AdcTransport<I2C, D> {
    i2c: I2C,
    delay: D,
    retry: RetryPolicy,
    /// 7-bit device address. [`ADDRESS_SENTINEL`] while uninitialised;
    /// lifecycle code in `adc.rs` is the only writer.
    pub(crate) address: u8,
}

impl<I2C, D> AdcTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, retry: RetryPolicy) -> Self {
        Self {
            i2c,
            delay,
            retry,
            address: ADDRESS_SENTINEL,
        }
    }

    /// Send `data` to the recorded address, retrying under the policy.
    ///
    /// A first-try success returns without any delay. Otherwise each
    /// failure is followed by the inter-attempt delay until the budget is
    /// spent, at which point the last bus error is returned.
    pub async fn write_retry(&mut self, data: &[u8]) -> Result<(), I2C::Error> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 1;

        loop {
            match self.i2c.write(self.address, data).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if attempt >= max_attempts {
                        return Err(e);
                    }
                    attempt += 1;
                    self.delay.delay_ms(self.retry.attempt_delay_ms).await;
                }
            }
        }
    }

    /// Receive exactly `buffer.len()` bytes from the recorded address,
    /// retrying under the same policy as [`write_retry`](Self::write_retry).
    pub async fn read_retry(&mut self, buffer: &mut [u8]) -> Result<(), I2C::Error> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 1;

        loop {
            match self.i2c.read(self.address, buffer).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if attempt >= max_attempts {
                        return Err(e);
                    }
                    attempt += 1;
                    self.delay.delay_ms(self.retry.attempt_delay_ms).await;
                }
            }
        }
    }

    /// Consume the transport and return the owned peripherals.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_fifty_attempts() {
        assert_eq!(RetryPolicy::default().max_attempts(), 50);
    }

    #[test]
    fn degenerate_policies_still_attempt_once() {
        assert_eq!(RetryPolicy::new(0, 0).max_attempts(), 1);
        assert_eq!(RetryPolicy::new(100, 0).max_attempts(), 1);
        assert_eq!(RetryPolicy::new(1000, 100).max_attempts(), 1);
    }
}
