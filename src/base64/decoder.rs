//! Streaming base64 decoder core.
//!
//! The decoder pulls raw encoded bytes four at a time, decodes each quantum
//! into up to three payload bytes, and parks them in a fixed 3-byte stack
//! until the caller asks for them. State is three bytes plus a count; nothing
//! is allocated and the input is never buffered beyond the current quantum.

use super::alphabet::{sextet, PAD};
use crate::source::PullSource;

/// A quantum is 4 encoded characters carrying up to 3 payload bytes.
const QUANTUM: usize = 4;

/// Maximum payload bytes held between calls.
const PENDING_CAP: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Decoder state
// ─────────────────────────────────────────────────────────────────────────────

/// Pull-based streaming base64 decoder.
///
/// Borrows its source for the decoding session; the source's lifetime and
/// any underlying resource remain the caller's concern.
///
/// # End of input vs. malformed input
/// [`decode_into`](Self::decode_into) signals both conditions the same way:
/// a short result. Callers that need to tell them apart can consult
/// [`saw_invalid_input`](Self::saw_invalid_input) and
/// [`exhausted`](Self::exhausted) after observing a short read.
///
/// # Thread safety
/// One decoder serves one logical decode session; it is `Send` when its
/// source is, but concurrent use requires external synchronisation.
pub struct Base64Decoder<'a, S: PullSource + ?Sized> {
    source: &'a mut S,
    /// Decoded bytes not yet delivered, next at `pending[pending_len - 1]`.
    pending: [u8; PENDING_CAP],
    pending_len: usize,
    exhausted: bool,
    saw_invalid: bool,
}

impl<'a, S: PullSource + ?Sized> Base64Decoder<'a, S> {
    /// Binds a decoder to a source. No input is consumed until the first
    /// [`decode_into`](Self::decode_into) call.
    pub fn new(source: &'a mut S) -> Self {
        Self {
            source,
            pending: [0; PENDING_CAP],
            pending_len: 0,
            exhausted: false,
            saw_invalid: false,
        }
    }

    /// Decodes up to `out.len()` bytes into `out`, returning the number
    /// actually written.
    ///
    /// A result shorter than the request means no further bytes will come:
    /// either the source ran out before a full trailing quantum, or a quantum
    /// contained a byte outside every accepted alphabet. Clean end of input
    /// is not an error and raises no signal beyond the short count.
    pub fn decode_into(&mut self, out: &mut [u8]) -> usize {
        let mut produced = 0;
        while produced < out.len() {
            if self.pending_len == 0 && !self.refill() {
                break;
            }
            self.pending_len -= 1;
            out[produced] = self.pending[self.pending_len];
            produced += 1;
        }
        produced
    }

    /// True once the source has reported end of input (fewer than 2 bytes
    /// available for a quantum).
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// True if decoding stopped because a quantum contained an invalid byte.
    /// Distinguishes corrupt input from a clean end of stream after a short
    /// [`decode_into`](Self::decode_into) result.
    pub fn saw_invalid_input(&self) -> bool {
        self.saw_invalid
    }

    /// Pulls and decodes one quantum into `pending`. Returns `false` when no
    /// further bytes can be produced (end of input or invalid byte).
    fn refill(&mut self) -> bool {
        if self.exhausted || self.saw_invalid {
            return false;
        }

        let mut quad = [0u8; QUANTUM];
        let got = self.source.pull(&mut quad);
        // A lone trailing character cannot carry a full payload byte; treat
        // 0 or 1 pulled bytes as end of input.
        if got < 2 {
            self.exhausted = true;
            return false;
        }
        // Model an encoder that omitted trailing padding.
        for slot in &mut quad[got..] {
            *slot = PAD;
        }

        // Each trailing '=' drops one payload byte: ..== is 1 byte, ...= is
        // 2, .... is 3. Only positions 2 and 3 are inspected.
        let pad_from = (2..QUANTUM).find(|&j| quad[j] == PAD).unwrap_or(QUANTUM);
        let skip = QUANTUM - pad_from;

        let mut packed: u32 = 0;
        for &raw in &quad {
            match sextet(raw) {
                Some(v) => packed = (packed << 6) | u32::from(v),
                None => {
                    self.saw_invalid = true;
                    return false;
                }
            }
        }

        // First payload byte sits in bits 16..24 and must be popped first,
        // so it lands on top of the stack.
        let count = PENDING_CAP - skip;
        for (j, slot) in self.pending[..count].iter_mut().rev().enumerate() {
            *slot = (packed >> (16 - 8 * j)) as u8;
        }
        self.pending_len = count;
        true
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
