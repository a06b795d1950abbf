//! Async driver for the LTC2499 24-bit delta-sigma ADC.
//!
//! This crate provides an async I2C driver for the Linear Technology
//! LTC2499 16-channel delta-sigma converter, built on the
//! `embedded-hal-async` traits.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **`driver`** (crate-private) — Bounded-retry I2C transport. The
//!   LTC2499 NAKs transactions while a conversion is in progress, so every
//!   transfer retries on a fixed backoff governed by [`RetryPolicy`].
//! - **`registers` / `codec`** — Pure bit manipulation: input-register
//!   encoding and result-word decoding.
//! - **[`Ltc2499`]** (public) — Validated, high-level API for device
//!   lifecycle and conversion reads.
//!
//! # Quick start
//!
//! ```no_run
//! use ltc2499_driver::{
//!     AdcConfig, ChannelMode, ChannelPolarity, ChannelSelection, Ltc2499, DEFAULT_ADDRESS,
//! };
//!
//! # async fn example(
//! #     i2c: impl embedded_hal_async::i2c::I2c,
//! #     delay: impl embedded_hal_async::delay::DelayNs,
//! # ) {
//! // Construct with any `embedded-hal-async` I2C and delay implementation
//! let mut adc = Ltc2499::new(i2c, delay);
//!
//! let config = AdcConfig::new(
//!     ChannelMode::Differential,
//!     ChannelPolarity::Even,
//!     ChannelSelection::Channel0_1,
//! );
//! adc.init(DEFAULT_ADDRESS, config).await.unwrap();
//!
//! // Read and decode one conversion
//! let volts = adc.read_voltage().await.unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   configuration types for embedded logging.

#![cfg_attr(not(test), no_std)]

pub use adc::Ltc2499;
pub use codec::decode_voltage;
pub use driver::RetryPolicy;
pub use error::AdcError;
pub use registers::{
    AdcConfig, ChannelMode, ChannelPolarity, ChannelSelection, DEFAULT_ADDRESS,
    MAX_OPERATION_TIMEOUT_MS, REFERENCE_VOLTAGE, RESOLUTION_LEVELS, RESULT_LEN, RETRY_DELAY_MS,
};

mod adc;
mod codec;
mod driver;
mod error;
mod registers;
