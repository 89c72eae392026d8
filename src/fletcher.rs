//! Fletcher-16 checksum.
//!
//! Two running sums reduced modulo 255: `c0` accumulates the bytes, `c1`
//! accumulates the successive values of `c0`, and the result packs them as
//! `(c1 << 8) | c0`. Position-sensitive, unlike a plain byte sum.
//!
//! # Parity vectors
//! * `fletcher16(&[])` == `0x0000`
//! * `fletcher16(&[1, 2])` == `0x0403`
//! * `fletcher16(b"abcde")` == `0xC8F0`

/// Modulo-255 accumulate without a division.
///
/// `s` is an already-reduced sum in `0..=254` and `b` a raw byte, so
/// `s + b + 1` fits in 9 bits. If bit 8 is set the sum passed 255 and
/// masking to the low 8 bits subtracts the extra 256; otherwise the `+ 1`
/// is taken back. Either way the result is `(s + b) % 255`.
#[inline]
fn add_mod_255(s: u16, b: u8) -> u16 {
    let s = s + u16::from(b) + 1;
    if s & 0x100 != 0 {
        s & 0xff
    } else {
        s - 1
    }
}

/// One-shot Fletcher-16 checksum over `data`. Returns `0` for empty input.
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut c0: u16 = 0;
    let mut c1: u16 = 0;
    for &b in data {
        c0 = add_mod_255(c0, b);
        c1 = add_mod_255(c1, c0 as u8);
    }
    (c1 << 8) | c0
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight `% 255` reference, for cross-checking the branchy reduction.
    fn fletcher16_reference(data: &[u8]) -> u16 {
        let mut c0: u32 = 0;
        let mut c1: u32 = 0;
        for &b in data {
            c0 = (c0 + u32::from(b)) % 255;
            c1 = (c1 + c0) % 255;
        }
        ((c1 as u16) << 8) | c0 as u16
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(fletcher16(&[]), 0);
    }

    #[test]
    fn pinned_two_byte_vector() {
        // c0: 1 then 3; c1: 1 then 4.
        assert_eq!(fletcher16(&[1, 2]), 0x0403);
    }

    #[test]
    fn pinned_abcde_vector() {
        // Standard Fletcher-16 test vector.
        assert_eq!(fletcher16(b"abcde"), 0xC8F0);
    }

    #[test]
    fn deterministic() {
        let data = b"determinism check";
        assert_eq!(fletcher16(data), fletcher16(data));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(fletcher16(&[1, 2]), fletcher16(&[2, 1]));
    }

    #[test]
    fn reduction_wraps_past_255() {
        // 0xff bytes force the bit-8 overflow path on every step.
        let data = [0xffu8; 300];
        assert_eq!(fletcher16(&data), fletcher16_reference(&data));
    }

    #[test]
    fn matches_reference_on_all_byte_values() {
        let data: Vec<u8> = (0u8..=255).cycle().take(1021).collect();
        assert_eq!(fletcher16(&data), fletcher16_reference(&data));
    }
}
