//! Streaming 16-bit folded checksum.
//!
//! Each byte is added to a 32-bit running sum, and the upper half is
//! folded back into the lower half immediately after every addition, in
//! the style of the Internet checksum but without the final one's
//! complement. The result is the low 16 bits of the accumulator; no
//! extra fold happens after the last byte.

/// Mask selecting the low 16 bits of the accumulator.
const LOW_16: u32 = 0xFFFF;

/// Add one byte to the running sum and fold the carry back in.
#[inline]
fn fold_byte(sum: u32, byte: u8) -> u32 {
    let sum = sum + byte as u32;
    (sum & LOW_16) + (sum >> 16)
}

/// Checksum of `b`.
///
/// An empty slice yields `0`. The value always fits in 16 bits; the
/// C ABI widens it to a non-negative `int`.
pub fn compute_checksum(b: &[u8]) -> u16 {
    let sum = b.iter().fold(0u32, |sum, &byte| fold_byte(sum, byte));
    (sum & LOW_16) as u16
}
