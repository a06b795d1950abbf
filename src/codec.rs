//! Conversion-result decoding.
//!
//! The LTC2499 delivers one conversion as four bytes, most significant
//! first. [`decode_voltage`] turns that wire buffer into a voltage.

use crate::registers::{
    CONVERSION_STATUS_MASK, GUARD_BITS, REFERENCE_VOLTAGE, RESOLUTION_LEVELS, RESULT_LEN,
};

/// Decode a raw conversion buffer into a voltage.
///
/// The buffer is reconstructed into a 32-bit word with its last byte as the
/// least significant, i.e. the wire order (MSB first) is reversed
/// explicitly rather than reinterpreted through host byte order. The top
/// bit of the word is a conversion-status flag and is cleared; the low 6
/// bits are guard bits below the device's 24-bit resolution and are
/// discarded. The remaining value scales linearly over the usable range,
/// which spans the lower half of the reference voltage.
///
/// This is a pure function and performs no error reporting: callers must
/// supply exactly [`RESULT_LEN`] meaningful bytes, otherwise the result is
/// garbage (but never a panic).
pub fn decode_voltage(buffer: &[u8]) -> f32 {
    let mut raw: u32 = 0;
    for (shift, byte) in buffer.iter().rev().take(RESULT_LEN).enumerate() {
        raw |= (*byte as u32) << (8 * shift as u32);
    }

    let value = (raw & CONVERSION_STATUS_MASK) >> GUARD_BITS;

    value as f32 * REFERENCE_VOLTAGE * 0.5 / (RESOLUTION_LEVELS - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_buffer_decodes_to_zero() {
        assert_eq!(decode_voltage(&[0, 0, 0, 0]), 0.0);
    }

    #[test]
    fn full_scale_code_decodes_to_half_reference() {
        // (2^24 - 1) << 6 = 0x3FFF_FFC0: the top code of the 24-bit range.
        // (2^24-1) * 5.0 * 0.5 / (2^24-1) = 2.5 exactly.
        let voltage = decode_voltage(&[0x3F, 0xFF, 0xFF, 0xC0]);
        assert!((voltage - 2.5).abs() < 1e-5);
    }

    #[test]
    fn status_bit_is_ignored() {
        let without_flag = decode_voltage(&[0x12, 0x34, 0x56, 0x40]);
        let with_flag = decode_voltage(&[0x92, 0x34, 0x56, 0x40]);
        assert_eq!(without_flag, with_flag);
    }

    #[test]
    fn guard_bits_are_ignored() {
        let clean = decode_voltage(&[0x12, 0x34, 0x56, 0x40]);
        let noisy = decode_voltage(&[0x12, 0x34, 0x56, 0x7F]);
        assert_eq!(clean, noisy);
    }

    #[test]
    fn decode_is_monotonic_in_the_measurement_bits() {
        // Increasing codes (status bit and guard bits held at zero) must
        // never produce a smaller voltage.
        let codes: [u32; 6] = [0, 1, 0x100, 0xFFFF, 0x12_3456, (1 << 24) - 1];
        let mut previous = f32::MIN;
        for code in codes {
            let raw = (code << 6).to_be_bytes();
            let voltage = decode_voltage(&raw);
            assert!(
                voltage >= previous,
                "voltage decreased at code {:#x}: {} < {}",
                code,
                voltage,
                previous
            );
            previous = voltage;
        }
    }

    #[test]
    fn midpoint_code_decodes_near_midpoint_voltage() {
        // Code 2^23 sits at the middle of the 24-bit range: ~1.25 V.
        let raw = ((1u32 << 23) << 6).to_be_bytes();
        let voltage = decode_voltage(&raw);
        assert!((voltage - 1.25).abs() < 1e-6);
    }

    #[test]
    fn short_buffer_still_returns_a_number() {
        // Undersized buffers are a caller error; the decode must not panic.
        let voltage = decode_voltage(&[0xFF]);
        assert!(voltage.is_finite());
    }
}
