//! # er-codec
//!
//! Shareable export codes for an exitready assessment.
//!
//! A snapshot is packed into one big integer by mixed-radix accumulation
//! (`acc = acc * radix + digit`), obfuscated with an affine transform, written
//! in uppercase base 36 and followed by a single checksum character holding
//! `obfuscated mod 36`. Decoding runs the same steps in reverse and fails as a
//! whole on any mismatch.
//!
//! The layout depends on the questionnaire: the question order, the scale
//! maximum and the sector and lifecycle lists are passed explicitly as a
//! [`CodecContext`].

pub mod bigint;
pub mod context;
pub mod decode;
pub mod encode;
pub mod error;
mod fields;
pub mod radix;
pub mod warnings;

pub use context::CodecContext;
pub use decode::decode;
pub use encode::{Encoded, encode};
pub use error::CodecError;
pub use warnings::{EncodeWarning, SelectionKind};

/// Affine obfuscation multiplier.
pub const MULTIPLIER: u32 = 15_485_863;
/// Affine obfuscation offset.
pub const OFFSET: u32 = 32_452_843;
