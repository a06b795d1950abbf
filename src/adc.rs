//! High-level interface for the LTC2499 ADC.
//!
//! [`Ltc2499`] wraps the low-level retrying transport with input
//! validation, lifecycle tracking, and a read-and-decode convenience
//! method.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::codec::decode_voltage;
use crate::driver::{AdcTransport, RetryPolicy};
use crate::error::AdcError;
use crate::registers::{AdcConfig, ADDRESS_SENTINEL, RESULT_LEN};

/// Device lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceStatus {
    Uninitialized,
    Initialized,
}

/// Async driver handle for one LTC2499 ADC on an I2C bus.
///
/// Owns the bus peripheral and a delay provider; all transactions for the
/// device are serialised through `&mut self`, matching the half-duplex bus
/// underneath. Construct one handle per device to drive several converters
/// on the same design.
///
/// # Lifecycle
///
/// 1. [`Ltc2499::new()`] — constructs the handle without any I2C traffic.
/// 2. [`Ltc2499::init()`] — writes the channel configuration and records
///    the device address.
/// 3. [`Ltc2499::read()`] / [`Ltc2499::read_voltage()`] — fetch conversion
///    results.
/// 4. [`Ltc2499::deinit()`] — writes the neutral configuration and resets
///    the lifecycle state.
/// 5. [`Ltc2499::release()`] — returns the owned peripherals.
///
/// # Example
///
/// ```no_run
/// use ltc2499_driver::{
///     AdcConfig, ChannelMode, ChannelPolarity, ChannelSelection, Ltc2499, DEFAULT_ADDRESS,
/// };
///
/// # async fn example(
/// #     i2c: impl embedded_hal_async::i2c::I2c,
/// #     delay: impl embedded_hal_async::delay::DelayNs,
/// # ) {
/// let config = AdcConfig::new(
///     ChannelMode::SingleEnded,
///     ChannelPolarity::Even,
///     ChannelSelection::Channel0_1,
/// );
///
/// let mut adc = Ltc2499::new(i2c, delay);
/// adc.init(DEFAULT_ADDRESS, config).await.unwrap();
/// let volts = adc.read_voltage().await.unwrap();
/// # }
/// ```
pub struct Ltc2499<I2C, D> {
    transport: AdcTransport<I2C, D>,
    status: DeviceStatus,
}

impl<I2C, D> Ltc2499<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new handle with the default retry policy.
    ///
    /// No I2C traffic is generated; the bus peripheral arrives already
    /// brought up and the handle starts uninitialised.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `delay` — delay provider used between retry attempts
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_retry_policy(i2c, delay, RetryPolicy::default())
    }

    /// Create a new handle with an explicit retry policy.
    pub fn with_retry_policy(i2c: I2C, delay: D, retry: RetryPolicy) -> Self {
        Self {
            transport: AdcTransport::new(i2c, delay, retry),
            status: DeviceStatus::Uninitialized,
        }
    }

    /// Whether the device has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.status == DeviceStatus::Initialized
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Initialise the ADC at `address` with the given channel configuration.
    ///
    /// Encodes the configuration with the enable bit asserted and issues it
    /// as a two-byte retried write. On success the handle becomes
    /// initialised with `address` recorded; on failure the state rolls back
    /// to uninitialised and the recorded address is cleared, so the handle
    /// never appears initialised with a stale address.
    ///
    /// Calling `init` again on an initialised handle is accepted: the
    /// configuration write is re-issued and the new address takes effect.
    ///
    /// # Errors
    /// * [`AdcError::InvalidArgument`] if `address` does not fit in 7 bits
    /// * [`AdcError::I2c`] if the configuration write exhausts its retries
    pub async fn init(
        &mut self,
        address: u8,
        config: AdcConfig,
    ) -> Result<(), AdcError<I2C::Error>> {
        if address > 0x7F {
            return Err(AdcError::InvalidArgument);
        }

        self.transport.address = address;

        let frame = config.encode();
        match self.write(&frame).await {
            Ok(()) => {
                self.status = DeviceStatus::Initialized;
                Ok(())
            }
            Err(e) => {
                self.transport.address = ADDRESS_SENTINEL;
                self.status = DeviceStatus::Uninitialized;
                Err(e)
            }
        }
    }

    /// Deinitialise the ADC by writing the neutral (all-zero) configuration.
    ///
    /// On success the handle becomes uninitialised and the recorded address
    /// is cleared. If the reset write fails the lifecycle state is left
    /// untouched — deinitialisation is never partially applied, so a caller
    /// can simply retry.
    ///
    /// # Errors
    /// * [`AdcError::NotInitialized`] if the handle is uninitialised
    ///   (no bus traffic is generated)
    /// * [`AdcError::I2c`] if the reset write exhausts its retries
    pub async fn deinit(&mut self) -> Result<(), AdcError<I2C::Error>> {
        if self.status == DeviceStatus::Uninitialized {
            return Err(AdcError::NotInitialized);
        }

        self.write(&[0, 0]).await?;

        self.status = DeviceStatus::Uninitialized;
        self.transport.address = ADDRESS_SENTINEL;
        Ok(())
    }

    /// Consume the handle and return the bus peripheral and delay provider.
    pub fn release(self) -> (I2C, D) {
        self.transport.release()
    }

    // -----------------------------------------------------------------------
    // Bus operations
    // -----------------------------------------------------------------------

    /// Read one 32-bit conversion result into `buffer`.
    ///
    /// The four bytes arrive most significant first; pass them to
    /// [`decode_voltage`](crate::decode_voltage) (or use
    /// [`read_voltage`](Self::read_voltage)) to obtain a voltage. The
    /// fixed-size buffer makes the result-width check a compile-time fact.
    ///
    /// # Errors
    /// * [`AdcError::NotInitialized`] if [`init`](Self::init) has not
    ///   succeeded (checked before any bus traffic)
    /// * [`AdcError::I2c`] if the transfer exhausts its retries
    pub async fn read(
        &mut self,
        buffer: &mut [u8; RESULT_LEN],
    ) -> Result<(), AdcError<I2C::Error>> {
        if self.status == DeviceStatus::Uninitialized {
            return Err(AdcError::NotInitialized);
        }

        self.transport.read_retry(buffer).await?;
        Ok(())
    }

    /// Read one conversion result and decode it into a voltage.
    pub async fn read_voltage(&mut self) -> Result<f32, AdcError<I2C::Error>> {
        let mut buffer = [0u8; RESULT_LEN];
        self.read(&mut buffer).await?;
        Ok(decode_voltage(&buffer))
    }

    /// Write a raw one- or two-byte frame to the device's input register.
    ///
    /// A one-byte frame writes the main configuration byte only; a two-byte
    /// frame also writes the reserved optional-features byte. Any other
    /// length is rejected before any bus traffic.
    ///
    /// This method deliberately does not check the lifecycle status: the
    /// neutral write issued by [`deinit`](Self::deinit) runs while the
    /// handle is still marked initialised, and raw register writes are
    /// permitted regardless of state. Callers gate lifecycle where it
    /// matters.
    ///
    /// # Errors
    /// * [`AdcError::InvalidArgument`] if `data` is not 1 or 2 bytes long
    /// * [`AdcError::I2c`] if the transfer exhausts its retries
    pub async fn write(&mut self, data: &[u8]) -> Result<(), AdcError<I2C::Error>> {
        if data.is_empty() || data.len() > 2 {
            return Err(AdcError::InvalidArgument);
        }

        self.transport.write_retry(data).await?;
        Ok(())
    }
}
