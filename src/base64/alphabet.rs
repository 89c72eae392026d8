//! Base64 alphabet lookup.
//!
//! The lookup is deliberately permissive: it accepts the standard alphabet
//! (RFC 4648 §4), the URL-safe alphabet (RFC 4648 §5), and a comma variant
//! for the value-63 slot, all simultaneously. Encoders in the field disagree
//! on the last two characters; a decoder for hand-fed or tool-fed streams is
//! better off taking them all.

/// The padding character.
pub const PAD: u8 = b'=';

/// Maps one raw encoded byte to its 6-bit value, or `None` for any byte
/// outside every accepted alphabet (including all bytes with the high bit
/// set).
///
/// `=` maps to `Some(0)`: padding only ever appears in positions whose
/// payload bytes are discarded, so its numeric value never reaches output.
#[inline]
pub fn sextet(raw: u8) -> Option<u8> {
    match raw {
        b'A'..=b'Z' => Some(raw - b'A'),
        b'a'..=b'z' => Some(raw - b'a' + 26),
        b'0'..=b'9' => Some(raw - b'0' + 52),
        b'+' | b'-' => Some(62),
        b'/' | b'_' | b',' => Some(63),
        PAD => Some(0),
        _ => None,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_contiguous_ranges() {
        assert_eq!(sextet(b'A'), Some(0));
        assert_eq!(sextet(b'Z'), Some(25));
        assert_eq!(sextet(b'a'), Some(26));
        assert_eq!(sextet(b'z'), Some(51));
        assert_eq!(sextet(b'0'), Some(52));
        assert_eq!(sextet(b'9'), Some(61));
    }

    #[test]
    fn variant_characters_share_values() {
        assert_eq!(sextet(b'+'), Some(62));
        assert_eq!(sextet(b'-'), Some(62));
        assert_eq!(sextet(b'/'), Some(63));
        assert_eq!(sextet(b'_'), Some(63));
        assert_eq!(sextet(b','), Some(63));
    }

    #[test]
    fn padding_maps_to_zero() {
        assert_eq!(sextet(PAD), Some(0));
    }

    #[test]
    fn high_bit_bytes_are_invalid() {
        for b in 0x80u8..=0xff {
            assert_eq!(sextet(b), None, "byte {b:#04x} should be invalid");
        }
    }

    #[test]
    fn ascii_outside_alphabet_is_invalid() {
        for b in [b' ', b'\n', b'\r', b'\t', b'.', b'!', b'@', b'[', b'`', b'{', 0u8] {
            assert_eq!(sextet(b), None, "byte {b:#04x} should be invalid");
        }
    }

    #[test]
    fn exactly_68_bytes_are_accepted() {
        // 26 + 26 + 10 letters/digits, 2 + 3 variant punctuation, plus '='.
        let accepted = (0u8..=255).filter(|&b| sextet(b).is_some()).count();
        assert_eq!(accepted, 68);
    }
}
