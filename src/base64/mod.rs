//! Streaming base64 decoding.
//!
//! [`Base64Decoder`] pulls encoded bytes from a [`crate::PullSource`] one
//! 4-character quantum at a time and serves decoded bytes on demand, with a
//! fixed 3-byte internal buffer and no allocation.

pub mod alphabet;
pub mod decoder;

pub use alphabet::{sextet, PAD};
pub use decoder::Base64Decoder;
