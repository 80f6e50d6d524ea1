/// Number of byte-wide digits in a `u32` key. Digit `DIGITS - 1` is the most significant byte.
pub const DIGITS: usize = 4;

/// Number of distinct values a single digit can take.
pub const BUCKETS: usize = 256;

/// Returns byte `digit` of `key`, where digit 0 is the least significant byte.
#[inline(always)]
pub fn extract_digit(key: u32, digit: usize) -> u8 {
    debug_assert!(digit < DIGITS, "digit {} out of range", digit);

    (key >> (digit * 8)) as u8
}
