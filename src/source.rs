//! The pull capability: an abstract byte source consumed by the decoder.
//!
//! A [`PullSource`] stands in for "wherever the encoded bytes come from" —
//! a file, a socket, a serial line, or an in-memory cursor — so the decoder
//! never names a concrete stream type and never needs one byte of buffering
//! beyond its own fixed state.

use std::io::Read;

/// A pull-based byte source.
///
/// # Contract
/// `pull` writes up to `buf.len()` bytes into `buf` and returns the number
/// written. A return value smaller than the request means the source is at
/// end of input; `0` means it is exhausted. Consumers do not retry partial
/// reads — a short pull ends the stream, it never signals "try again".
///
/// The source is never assumed to be seekable or re-readable.
pub trait PullSource {
    fn pull(&mut self, buf: &mut [u8]) -> usize;
}

impl<S: PullSource + ?Sized> PullSource for &mut S {
    fn pull(&mut self, buf: &mut [u8]) -> usize {
        (**self).pull(buf)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SliceSource — in-memory cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Pulls from a borrowed byte slice, front to back.
pub struct SliceSource<'a> {
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not yet pulled.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }
}

impl PullSource for SliceSource<'_> {
    fn pull(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        n
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ReaderSource — std::io::Read adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Adapts any [`std::io::Read`] into a [`PullSource`].
///
/// The pull contract has no error channel, so an I/O error is reported as
/// exhaustion (`0`). Callers that need to distinguish a read failure from a
/// clean end of stream should check the reader out-of-band after decoding.
///
/// `ErrorKind::Interrupted` is retried rather than treated as end of input.
pub struct ReaderSource<R: Read> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consumes the adapter, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> PullSource for ReaderSource<R> {
    fn pull(&mut self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        filled
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn slice_source_pulls_in_order_and_exhausts() {
        let mut src = SliceSource::new(b"abcdef");
        let mut buf = [0u8; 4];
        assert_eq!(src.pull(&mut buf), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.pull(&mut buf), 2);
        assert_eq!(&buf[..2], b"ef");
        assert_eq!(src.pull(&mut buf), 0);
        assert_eq!(src.pull(&mut buf), 0);
    }

    #[test]
    fn slice_source_empty_is_immediately_exhausted() {
        let mut src = SliceSource::new(b"");
        let mut buf = [0u8; 1];
        assert_eq!(src.pull(&mut buf), 0);
    }

    #[test]
    fn reader_source_fills_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("encoded.txt");
        fs::write(&path, b"TWFuTWFu").unwrap();

        let mut src = ReaderSource::new(fs::File::open(&path).unwrap());
        let mut buf = [0u8; 4];
        assert_eq!(src.pull(&mut buf), 4);
        assert_eq!(&buf, b"TWFu");
        assert_eq!(src.pull(&mut buf), 4);
        assert_eq!(src.pull(&mut buf), 0);
    }

    #[test]
    fn reader_source_coalesces_short_reads() {
        // A reader that trickles one byte per read() call must still satisfy
        // a 4-byte pull in one shot.
        struct Trickle<'a>(&'a [u8]);
        impl Read for Trickle<'_> {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.0.is_empty() || buf.is_empty() {
                    return Ok(0);
                }
                buf[0] = self.0[0];
                self.0 = &self.0[1..];
                Ok(1)
            }
        }

        let mut src = ReaderSource::new(Trickle(b"TWFu"));
        let mut buf = [0u8; 4];
        assert_eq!(src.pull(&mut buf), 4);
        assert_eq!(&buf, b"TWFu");
    }

    #[test]
    fn mut_ref_is_a_source_too() {
        fn pull_one(src: &mut impl PullSource) -> usize {
            let mut b = [0u8; 1];
            src.pull(&mut b)
        }
        let mut src = SliceSource::new(b"x");
        assert_eq!(pull_one(&mut &mut src), 1);
    }
}
