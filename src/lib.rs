//! Streaming base64 decoding and Fletcher-16 checksum primitives.
//!
//! Built for constrained pipelines: no allocation, no whole-input buffering,
//! and a pull-based source abstraction instead of a concrete stream type.
//! The two primitives are independent; a caller wanting a
//! `base64 → inflate → verify` pipeline composes them itself (the inflate
//! stage is an external collaborator — see [`inflate`] for its I/O contract).

pub mod base64;
pub mod fletcher;
pub mod inflate;
pub mod source;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use base64::Base64Decoder;
pub use fletcher::fletcher16;
pub use source::{PullSource, ReaderSource, SliceSource};
