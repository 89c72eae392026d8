//! E2E Test Suite 02: Composing the primitives
//!
//! The crate ships independent pieces; these tests chain them the way a
//! caller would: decode a base64 stream into a fixed buffer, then verify the
//! result with Fletcher-16. Also covers the inflate sink boundary with a
//! scripted stand-in engine.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use b64stream::inflate::{BufferSink, InflateSink, InflateSource};
use b64stream::{fletcher16, Base64Decoder, SliceSource};

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: decode → checksum, fixed buffers only
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_then_checksum() {
    let payload = b"firmware image bytes \x00\x01\x02\xfe\xff";
    let encoded = STANDARD.encode(payload);

    let mut src = SliceSource::new(encoded.as_bytes());
    let mut dec = Base64Decoder::new(&mut src);
    let mut buf = [0u8; 64];
    let n = dec.decode_into(&mut buf);

    assert_eq!(&buf[..n], payload);
    assert_eq!(fletcher16(&buf[..n]), fletcher16(payload));
    assert_ne!(fletcher16(&buf[..n]), fletcher16(&payload[..n - 1]));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: checksum detects a corrupted transfer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_checksum_detects_bit_flip() {
    let payload: Vec<u8> = (0..200u8).collect();
    let expected = fletcher16(&payload);

    let mut flipped = payload.clone();
    flipped[100] ^= 0x01;
    assert_ne!(fletcher16(&flipped), expected);

    let mut swapped = payload.clone();
    swapped.swap(3, 4);
    assert_ne!(fletcher16(&swapped), expected, "position sensitivity");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: scripted inflate engine against BufferSink
// ─────────────────────────────────────────────────────────────────────────────

/// A stand-in for an external inflate engine: replays a fixed script of
/// literal writes and back-reference copies through the sink contract.
enum Op<'a> {
    Lit(&'a [u8]),
    Copy { len: usize, dist: usize },
}

fn replay(ops: &[Op<'_>], sink: &mut impl InflateSink) -> Option<()> {
    for op in ops {
        match *op {
            Op::Lit(data) => {
                if sink.write(data) < data.len() {
                    return None;
                }
            }
            Op::Copy { len, dist } => {
                if sink.rewrite(len, dist)? < len {
                    return None;
                }
            }
        }
    }
    Some(())
}

#[test]
fn test_scripted_inflate_into_buffer_sink() {
    // "abcabcabcX" expressed as one literal run plus an overlapping copy.
    let script = [
        Op::Lit(b"abc"),
        Op::Copy { len: 6, dist: 3 },
        Op::Lit(b"X"),
    ];

    let mut buf = [0u8; 16];
    let mut sink = BufferSink::new(&mut buf);
    assert_eq!(replay(&script, &mut sink), Some(()));
    assert_eq!(sink.written(), b"abcabcabcX");
    assert_eq!(fletcher16(sink.written()), fletcher16(b"abcabcabcX"));
}

#[test]
fn test_scripted_inflate_rejects_bad_distance() {
    let script = [Op::Lit(b"ab"), Op::Copy { len: 4, dist: 5 }];
    let mut buf = [0u8; 16];
    let mut sink = BufferSink::new(&mut buf);
    assert_eq!(replay(&script, &mut sink), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: decoded stream feeds an inflate source directly
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_slice_source_doubles_as_inflate_source() {
    // InflateSource is blanket-implemented for every PullSource, so the raw
    // side of an inflate engine can be any source this crate knows about.
    let mut src = SliceSource::new(b"\x78\x9c\x03\x00");
    let mut header = [0u8; 2];
    assert_eq!(InflateSource::read(&mut src, &mut header), 2);
    assert_eq!(header, [0x78, 0x9c]);
}
