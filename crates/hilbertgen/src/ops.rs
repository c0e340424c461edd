//! Support operations for the 2D Hilbert state machine.

/// Convert a binary index to its Binary Reflected Gray Code (BRGC) form.
pub fn graycode(x: u32) -> u32 {
    x ^ (x >> 1)
}

/// Gray code limited to the low two bits.
#[inline]
pub fn gray2(word: u32) -> u32 {
    graycode(word) & 3
}

/// Rotate the 2-bit label used by the Hilbert state machine.
#[inline]
pub fn rot2(label: u32) -> u32 {
    match label & 3 {
        0 => 0,
        1 => 2,
        2 => 1,
        _ => 3,
    }
}
