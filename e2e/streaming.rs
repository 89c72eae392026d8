//! E2E Test Suite 01: Streaming base64 decoding
//!
//! Exercises the decoder against realistic sources end to end:
//! - File-backed sources through the std::io::Read adapter
//! - Output served across many calls with awkward request sizes
//! - Alphabet-variant equivalence on full messages
//! - Random round-trips against a reference encoder
//! - Corrupt and truncated streams

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::{Rng, SeedableRng};

use b64stream::{Base64Decoder, PullSource, ReaderSource, SliceSource};

/// Decodes everything the source has to give, `step` output bytes at a time.
fn drain(src: &mut impl PullSource, step: usize) -> Vec<u8> {
    let mut dec = Base64Decoder::new(src);
    let mut out = Vec::new();
    let mut chunk = vec![0u8; step];
    loop {
        let n = dec.decode_into(&mut chunk);
        out.extend_from_slice(&chunk[..n]);
        if n < chunk.len() {
            return out;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: Decode from a real file via ReaderSource
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decode_from_file() {
    let payload = b"Many hands make light work.";
    let encoded = STANDARD.encode(payload);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("payload.b64");
    std::fs::write(&path, &encoded).unwrap();

    let mut src = ReaderSource::new(std::fs::File::open(&path).unwrap());
    assert_eq!(drain(&mut src, 7), payload);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: Request sizes don't change the output
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_output_invariant_under_request_size() {
    let payload: Vec<u8> = (0..251u32).map(|i| (i * 7 % 256) as u8).collect();
    let encoded = STANDARD.encode(&payload);

    for step in [1, 2, 3, 4, 5, 16, 64, 1024] {
        let mut src = SliceSource::new(encoded.as_bytes());
        assert_eq!(drain(&mut src, step), payload, "request size {step}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: Unpadded trailing quantum (encoder omitted '=')
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unpadded_input_decodes_like_padded() {
    let payload = b"padding is optional here";
    let padded = STANDARD.encode(payload);
    let unpadded = STANDARD_NO_PAD.encode(payload);
    assert_ne!(padded, unpadded);

    let mut a = SliceSource::new(padded.as_bytes());
    let mut b = SliceSource::new(unpadded.as_bytes());
    assert_eq!(drain(&mut a, 8), payload);
    assert_eq!(drain(&mut b, 8), payload);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: Standard and URL-safe alphabets decode identically
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_alphabet_variants_full_message() {
    // Bytes chosen to produce '+'/'/' (and '-'/'_') densely in the encoding.
    let payload: Vec<u8> = (0..=255u8).rev().collect();
    let standard = STANDARD_NO_PAD.encode(&payload);
    let url_safe = URL_SAFE_NO_PAD.encode(&payload);
    assert_ne!(standard, url_safe);

    let mut a = SliceSource::new(standard.as_bytes());
    let mut b = SliceSource::new(url_safe.as_bytes());
    let decoded = drain(&mut a, 32);
    assert_eq!(decoded, payload);
    assert_eq!(drain(&mut b, 32), decoded);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: Random round-trips against the reference encoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_random_roundtrips() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x6236_3473);
    for _ in 0..200 {
        let len = rng.gen_range(0..512);
        let payload: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let encoded = if rng.gen() {
            STANDARD.encode(&payload)
        } else {
            STANDARD_NO_PAD.encode(&payload)
        };
        let step = rng.gen_range(1..64);

        let mut src = SliceSource::new(encoded.as_bytes());
        assert_eq!(drain(&mut src, step), payload, "len {len} step {step}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: Corruption surfaces as a short read with the invalid flag set
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_corrupt_stream_short_read() {
    let payload = b"good bytes then junk";
    let mut encoded = STANDARD.encode(payload).into_bytes();
    encoded[8] = b'\n'; // corrupt the third quantum

    let mut src = SliceSource::new(&encoded);
    let mut dec = Base64Decoder::new(&mut src);
    let mut out = vec![0u8; payload.len()];
    let n = dec.decode_into(&mut out);
    assert_eq!(&out[..n], &payload[..6], "two clean quanta before the bad one");
    assert!(dec.saw_invalid_input());
    assert!(!dec.exhausted());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: Truncation mid-stream yields the decodable prefix
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_truncated_stream_yields_prefix() {
    let payload = b"truncated transmission";
    let encoded = STANDARD_NO_PAD.encode(payload);

    // Cut to 4k+1 characters: the lone trailing character carries no byte.
    let cut = &encoded.as_bytes()[..9];
    let mut src = SliceSource::new(cut);
    let mut dec = Base64Decoder::new(&mut src);
    let mut out = vec![0u8; payload.len()];
    let n = dec.decode_into(&mut out);
    assert_eq!(&out[..n], &payload[..6]);
    assert!(dec.exhausted());
    assert!(!dec.saw_invalid_input());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: Decoder works through a trait object source
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_dyn_source() {
    let mut src = SliceSource::new(b"TWFu");
    let dyn_src: &mut dyn PullSource = &mut src;
    let mut dec = Base64Decoder::new(dyn_src);
    let mut out = [0u8; 3];
    assert_eq!(dec.decode_into(&mut out), 3);
    assert_eq!(&out, b"Man");
}
