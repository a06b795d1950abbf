//! LTC2499 input-register layout and device constants.
//!
//! The ADC is configured through a 16-bit input register sent as two bytes.
//! Only the leading byte carries information here (MSB to LSB):
//!
//! ```text
//! 1 0 1 | mode | polarity | channel(3)
//! ```
//!
//! The fixed `101` prefix marks the byte as an input-register command with
//! the enable bit asserted. The trailing byte selects optional features
//! (speed mode, temperature sensor) and is always zero in this driver.

// ---------------------------------------------------------------------------
// Input-register bit positions
// ---------------------------------------------------------------------------

/// Most significant bit of the leading input-register byte (always set).
pub const INPUT_REGISTER_MSB: u8 = 0b1000_0000;

/// Enable bit (bit 5 of the leading byte). Set to latch a new channel
/// configuration and start a conversion.
pub const ENABLE_BIT: u8 = 0b0010_0000;

/// Channel input mode (bit 4 of the leading input-register byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelMode {
    /// Measure the voltage between the two channels of the selected pair.
    Differential = 0,
    /// Measure one channel of the selected pair against COM.
    SingleEnded = 0b1_0000,
}

/// Channel polarity (bit 3 of the leading input-register byte).
///
/// Only meaningful in single-ended mode, where it picks the even- or
/// odd-numbered channel within the selected pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelPolarity {
    /// Even-numbered channel (0, 2, 4, ...).
    Even = 0,
    /// Odd-numbered channel (1, 3, 5, ...).
    Odd = 0b1000,
}

/// Channel pair selection (low 3 bits of the leading input-register byte).
///
/// In differential mode this names the channel pair directly. In
/// single-ended mode the measured channel within the pair is chosen by
/// [`ChannelPolarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelSelection {
    /// Channels 0 and 1.
    Channel0_1 = 0b000,
    /// Channels 2 and 3.
    Channel2_3 = 0b001,
    /// Channels 4 and 5.
    Channel4_5 = 0b010,
    /// Channels 6 and 7.
    Channel6_7 = 0b011,
    /// Channels 8 and 9.
    Channel8_9 = 0b100,
    /// Channels 10 and 11.
    Channel10_11 = 0b101,
    /// Channels 12 and 13.
    Channel12_13 = 0b110,
    /// Channels 14 and 15.
    Channel14_15 = 0b111,
}

// ---------------------------------------------------------------------------
// Channel configuration
// ---------------------------------------------------------------------------

/// Channel configuration written to the input register on initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Differential or single-ended input.
    pub mode: ChannelMode,
    /// Even/odd channel within the pair (single-ended mode only).
    pub polarity: ChannelPolarity,
    /// Which of the eight channel pairs to convert.
    pub channels: ChannelSelection,
}

impl AdcConfig {
    /// Create a new channel configuration.
    pub const fn new(
        mode: ChannelMode,
        polarity: ChannelPolarity,
        channels: ChannelSelection,
    ) -> Self {
        Self {
            mode,
            polarity,
            channels,
        }
    }

    /// Encode the configuration as the two-byte input-register frame.
    ///
    /// The leading byte carries the `101` command prefix (enable bit
    /// asserted) plus the mode, polarity, and channel bits. The trailing
    /// byte configures optional features and is always zero.
    pub const fn encode(self) -> [u8; 2] {
        let first = INPUT_REGISTER_MSB
            | ENABLE_BIT
            | self.mode as u8
            | self.polarity as u8
            | self.channels as u8;
        [first, 0]
    }
}

// ---------------------------------------------------------------------------
// Result-word layout
// ---------------------------------------------------------------------------

/// Size in bytes of one conversion result on the wire.
pub const RESULT_LEN: usize = 4;

/// Mask clearing the top bit of the 32-bit result word. That bit is a
/// conversion-status flag, not part of the measurement.
pub const CONVERSION_STATUS_MASK: u32 = 0x7FFF_FFFF;

/// Low bits of the result word that carry no measurement information.
pub const GUARD_BITS: u32 = 6;

// ---------------------------------------------------------------------------
// Scaling constants
// ---------------------------------------------------------------------------

/// Reference voltage supplied to the ADC, in volts.
pub const REFERENCE_VOLTAGE: f32 = 5.0;

/// Number of output codes at the device's 24-bit resolution.
pub const RESOLUTION_LEVELS: u32 = 1 << 24;

// ---------------------------------------------------------------------------
// Timing constants
// ---------------------------------------------------------------------------

/// Delay between retry attempts, in milliseconds.
pub const RETRY_DELAY_MS: u32 = 100;

/// Total retry budget for one read or write operation, in milliseconds.
pub const MAX_OPERATION_TIMEOUT_MS: u32 = 5000;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// 7-bit I2C address of an LTC2499 with all three CA pins tied low.
pub const DEFAULT_ADDRESS: u8 = 0x14;

/// Address recorded while the device is uninitialised.
pub(crate) const ADDRESS_SENTINEL: u8 = 0;
