//! Address Field Decoding.
//!
//! This module splits a raw address into the three fields a cache consults. It provides:
//! 1. **Decoding:** `decode` maps `(address, offset_bits, index_bits)` to tag, index and offset.
//! 2. **Reassembly:** `DecodedAddress::reassemble` inverts the split for the same widths.
//! 3. **Rendering:** Unprefixed binary strings, optionally zero-padded to a field width.
//!
//! Decoding performs no range validation. Shift amounts of 64 or more are defined here
//! as producing zero (for shifted values) and an all-ones mask, rather than overflowing.

use serde::Serialize;

/// An address split into tag, index and offset fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedAddress {
    /// High-order bits above the index and offset fields.
    pub tag: u64,
    /// Line or set selector; always 0 when the index field is empty.
    pub index: u64,
    /// Position within the block.
    pub offset: u64,
}

impl DecodedAddress {
    /// Rebuilds the original address from its fields.
    ///
    /// # Arguments
    ///
    /// * `offset_bits` - Width of the offset field used when decoding.
    /// * `index_bits` - Width of the index field used when decoding.
    pub fn reassemble(&self, offset_bits: u32, index_bits: u32) -> u64 {
        shl(self.tag, offset_bits + index_bits) | shl(self.index, offset_bits) | self.offset
    }
}

/// Returns a mask with the low `bits` bits set.
#[inline]
pub fn low_mask(bits: u32) -> u64 {
    1u64.checked_shl(bits).map_or(u64::MAX, |v| v - 1)
}

#[inline]
fn shr(value: u64, bits: u32) -> u64 {
    value.checked_shr(bits).unwrap_or(0)
}

#[inline]
fn shl(value: u64, bits: u32) -> u64 {
    value.checked_shl(bits).unwrap_or(0)
}

/// Splits `address` into tag, index and offset.
///
/// * `offset = address & ((1 << offset_bits) - 1)`
/// * `index = (address >> offset_bits) & ((1 << index_bits) - 1)`
/// * `tag = address >> (offset_bits + index_bits)`
///
/// # Examples
///
/// ```
/// use cachesim_core::common::decode;
///
/// // 0b1_10_11: tag 1, index 2, offset 3 with 2 offset bits and 2 index bits.
/// let d = decode(0b11011, 2, 2);
/// assert_eq!((d.tag, d.index, d.offset), (1, 2, 3));
/// ```
#[inline]
pub fn decode(address: u64, offset_bits: u32, index_bits: u32) -> DecodedAddress {
    DecodedAddress {
        tag: shr(address, offset_bits.saturating_add(index_bits)),
        index: shr(address, offset_bits) & low_mask(index_bits),
        offset: address & low_mask(offset_bits),
    }
}

/// Renders `value` in binary without prefix or padding (`0` renders as `"0"`).
pub fn to_binary(value: u64) -> String {
    format!("{value:b}")
}

/// Renders `value` in binary, zero-padded on the left to at least `width` digits.
pub fn to_binary_padded(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}
