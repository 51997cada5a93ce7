//! Deterministic string hash used to seed template selection.

/// Polynomial rolling hash (`h = h * 31 + unit`) over the UTF-16 code units
/// of `s`, with 32-bit signed wraparound, returned as its absolute value.
///
/// `i32::MIN` has no positive `i32` counterpart, so the result is a `u32`
/// and that case yields `2147483648`.
pub fn hash_code(s: &str) -> u32 {
    let h = s.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    h.unsigned_abs()
}
