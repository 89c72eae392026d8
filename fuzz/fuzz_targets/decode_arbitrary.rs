#![no_main]
use libfuzzer_sys::fuzz_target;

use b64stream::{Base64Decoder, SliceSource};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the streaming decoder.
    // Short reads are expected and fine; what we verify is no panics and
    // that the contract bounds hold.

    // One-shot with a generous buffer.
    {
        let mut src = SliceSource::new(data);
        let mut dec = Base64Decoder::new(&mut src);
        let mut out = vec![0u8; data.len() + 3];
        let n = dec.decode_into(&mut out);
        assert!(n <= out.len());
        // 4 encoded characters never expand past 3 payload bytes.
        assert!(n <= (data.len() / 4 + 1) * 3);
    }

    // Zero-length output buffer.
    {
        let mut src = SliceSource::new(data);
        let mut dec = Base64Decoder::new(&mut src);
        assert_eq!(dec.decode_into(&mut []), 0);
    }

    // Byte-at-a-time must agree with one-shot.
    {
        let mut src = SliceSource::new(data);
        let mut dec = Base64Decoder::new(&mut src);
        let mut oneshot = vec![0u8; data.len() + 3];
        let n = dec.decode_into(&mut oneshot);

        let mut src2 = SliceSource::new(data);
        let mut dec2 = Base64Decoder::new(&mut src2);
        let mut dribbled = Vec::new();
        let mut byte = [0u8; 1];
        while dec2.decode_into(&mut byte) == 1 {
            dribbled.push(byte[0]);
        }
        assert_eq!(dribbled, &oneshot[..n]);
    }
});
