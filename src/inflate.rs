//! I/O contract for an external inflate engine.
//!
//! Decompression itself is not implemented here. These traits define the
//! boundary a caller uses to plug a deflate/inflate implementation into the
//! same pull/push streaming style as the rest of the crate: the engine reads
//! compressed input from an [`InflateSource`], appends literals through
//! [`InflateSink::write`], and resolves LZ77 back-references through
//! [`InflateSink::rewrite`] without the sink ever exposing its buffer.
//!
//! [`BufferSink`] is the allocation-free sink an embedded caller would hand
//! such an engine: a borrowed fixed buffer with a write cursor.

/// Supplies raw compressed input to an inflate engine.
///
/// Same contract as [`crate::PullSource`]: short only at end of input, `0`
/// means exhausted. Kept as a separate trait so an inflate engine can be
/// bounded on exactly the capabilities it uses.
pub trait InflateSource {
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

impl<S: crate::PullSource + ?Sized> InflateSource for S {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.pull(buf)
    }
}

/// Receives decompressed output from an inflate engine.
pub trait InflateSink {
    /// Appends `data` to the output history, returning the number of bytes
    /// accepted. Fewer than `data.len()` means the sink is full.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Copies `len` bytes starting `dist` positions back in the already
    /// written output, appending them to the history (the LZ77 match copy).
    ///
    /// Returns `None` when `dist` reaches behind the start of the history;
    /// otherwise the number of bytes copied, which is less than `len` only
    /// if the sink ran out of room. `dist` may be smaller than `len`: the
    /// copy proceeds byte by byte, so a `dist` of 1 replicates the last
    /// written byte (run-length expansion).
    fn rewrite(&mut self, len: usize, dist: usize) -> Option<usize>;
}

// ─────────────────────────────────────────────────────────────────────────────
// BufferSink — fixed-buffer history sink
// ─────────────────────────────────────────────────────────────────────────────

/// An [`InflateSink`] over a caller-owned fixed buffer.
///
/// Everything written stays in the buffer and doubles as the back-reference
/// history, so `rewrite` can reach any byte produced so far. Never allocates.
pub struct BufferSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufferSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// The output produced so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl InflateSink for BufferSink<'_> {
    fn write(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.buf.len() - self.pos);
        self.buf[self.pos..self.pos + n].copy_from_slice(&data[..n]);
        self.pos += n;
        n
    }

    fn rewrite(&mut self, len: usize, dist: usize) -> Option<usize> {
        if dist == 0 || dist > self.pos {
            return None;
        }
        let n = len.min(self.buf.len() - self.pos);
        // Source and destination may overlap when dist < len; the copy must
        // run front to back one byte at a time so earlier copied bytes feed
        // later ones.
        for _ in 0..n {
            self.buf[self.pos] = self.buf[self.pos - dist];
            self.pos += 1;
        }
        Some(n)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    #[test]
    fn write_appends_and_reports_capacity() {
        let mut buf = [0u8; 8];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.write(b"abc"), 3);
        assert_eq!(sink.write(b"defgh"), 5);
        assert_eq!(sink.written(), b"abcdefgh");
        // Full: further writes accept nothing.
        assert_eq!(sink.write(b"x"), 0);
    }

    #[test]
    fn write_truncates_at_capacity() {
        let mut buf = [0u8; 4];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.write(b"abcdef"), 4);
        assert_eq!(sink.written(), b"abcd");
    }

    #[test]
    fn rewrite_copies_from_history() {
        let mut buf = [0u8; 16];
        let mut sink = BufferSink::new(&mut buf);
        sink.write(b"abcd");
        assert_eq!(sink.rewrite(2, 4), Some(2));
        assert_eq!(sink.written(), b"abcdab");
    }

    #[test]
    fn rewrite_overlapping_run_replicates() {
        let mut buf = [0u8; 8];
        let mut sink = BufferSink::new(&mut buf);
        sink.write(b"x");
        // dist 1, len 5: classic RLE expansion.
        assert_eq!(sink.rewrite(5, 1), Some(5));
        assert_eq!(sink.written(), b"xxxxxx");
    }

    #[test]
    fn rewrite_too_far_back_fails() {
        let mut buf = [0u8; 8];
        let mut sink = BufferSink::new(&mut buf);
        sink.write(b"ab");
        assert_eq!(sink.rewrite(1, 3), None);
        assert_eq!(sink.rewrite(1, 0), None);
        // A failed rewrite writes nothing.
        assert_eq!(sink.written(), b"ab");
    }

    #[test]
    fn rewrite_truncates_at_capacity() {
        let mut buf = [0u8; 4];
        let mut sink = BufferSink::new(&mut buf);
        sink.write(b"ab");
        assert_eq!(sink.rewrite(10, 2), Some(2));
        assert_eq!(sink.written(), b"abab");
    }

    #[test]
    fn any_pull_source_reads_as_inflate_input() {
        fn take<S: InflateSource>(src: &mut S) -> usize {
            let mut buf = [0u8; 4];
            src.read(&mut buf)
        }
        let mut src = SliceSource::new(b"zip");
        assert_eq!(take(&mut src), 3);
    }
}
