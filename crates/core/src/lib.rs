//! lanepack-core: bit-interleaving codec that packs characters into integers
//!
//! Up to K characters (default 4) are turned into fixed-width bit lanes
//! (default 8 bits) and transposed into one integer of K x width bits
//! (default 32). The transform is a pure permutation of bit positions, so it
//! is exactly reversible.
//!
//! This is an obfuscation/packing transform, not encryption.
//!
//! # Architecture
//!
//! - `lane`: one character <-> one fixed-width bit lane
//! - `chunk`: K lanes <-> one interleaved word, padding and stripping policy
//! - `codec`: whole strings <-> ordered word sequences
//! - `config`: the (K, width) pair shared by both directions
//! - `metrics`: counters describing a codec run
//!
//! # Design Principles
//!
//! - **No panics**: every invalid input is a structured error
//! - **No truncation**: characters that do not fit a lane are rejected
//! - **Stateless**: every call is independent and thread-safe

pub mod chunk;
pub mod codec;
pub mod config;
pub mod error;
pub mod lane;
pub mod metrics;

// Re-export commonly used types
pub use chunk::EncodedWord;
pub use codec::{EncodedSequence, Scrambler};
pub use config::CodecConfig;
pub use error::{Error, Result};
