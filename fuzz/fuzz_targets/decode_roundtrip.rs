#![no_main]
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use libfuzzer_sys::fuzz_target;

use b64stream::{Base64Decoder, SliceSource};

fuzz_target!(|data: &[u8]| {
    // Encode with a reference encoder, stream-decode back, expect equality.
    for encoded in [
        STANDARD.encode(data),
        STANDARD_NO_PAD.encode(data),
        URL_SAFE_NO_PAD.encode(data),
    ] {
        let mut src = SliceSource::new(encoded.as_bytes());
        let mut dec = Base64Decoder::new(&mut src);
        let mut out = vec![0u8; data.len() + 3];
        let n = dec.decode_into(&mut out);
        assert_eq!(
            &out[..n],
            data,
            "round-trip mismatch: {} encoded chars back to {} bytes (expected {})",
            encoded.len(),
            n,
            data.len()
        );
        assert!(!dec.saw_invalid_input());
    }
});
