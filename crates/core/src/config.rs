//! Codec configuration shared by the encode and decode sides.
//!
//! A sequence can only be decoded with the exact `(chars_per_chunk,
//! lane_width)` pair that produced it, so the pair is fixed at construction
//! and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{ChunkError, Error, Result};

/// Default number of characters packed into one word.
pub const DEFAULT_CHARS_PER_CHUNK: usize = 4;

/// Default number of bits per character lane.
pub const DEFAULT_LANE_WIDTH: u32 = 8;

/// Widest lane supported (lane payloads are `u32`).
pub const MAX_LANE_WIDTH: u32 = 32;

/// Widest encoded word supported (words are `u64`).
pub const MAX_WORD_BITS: u32 = 64;

/// Immutable `(K, width)` pair.
///
/// # Invariants
/// - `chars_per_chunk >= 1`
/// - `1 <= lane_width <= 32`
/// - `chars_per_chunk * lane_width <= 64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodecConfig")]
pub struct CodecConfig {
    chars_per_chunk: usize,
    lane_width: u32,
}

#[derive(Deserialize)]
struct RawCodecConfig {
    chars_per_chunk: usize,
    lane_width: u32,
}

impl TryFrom<RawCodecConfig> for CodecConfig {
    type Error = Error;

    fn try_from(raw: RawCodecConfig) -> Result<Self> {
        CodecConfig::new(raw.chars_per_chunk, raw.lane_width)
    }
}

impl CodecConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if any invariant is violated.
    pub fn new(chars_per_chunk: usize, lane_width: u32) -> Result<Self> {
        if chars_per_chunk == 0 {
            return Err(Error::Config("chars_per_chunk must be at least 1".to_string()));
        }
        if lane_width == 0 || lane_width > MAX_LANE_WIDTH {
            return Err(Error::Config(format!(
                "lane_width must be in 1..={}, got {}",
                MAX_LANE_WIDTH, lane_width
            )));
        }
        let word_bits = (chars_per_chunk as u64) * (lane_width as u64);
        if word_bits > MAX_WORD_BITS as u64 {
            return Err(Error::Config(format!(
                "{} chars x {} bits = {} bits exceeds the {}-bit word limit",
                chars_per_chunk, lane_width, word_bits, MAX_WORD_BITS
            )));
        }

        Ok(Self {
            chars_per_chunk,
            lane_width,
        })
    }

    /// Characters per chunk (K).
    pub fn chars_per_chunk(&self) -> usize {
        self.chars_per_chunk
    }

    /// Bits per character lane.
    pub fn lane_width(&self) -> u32 {
        self.lane_width
    }

    /// Significant bits in one encoded word (K * width).
    pub fn word_bits(&self) -> u32 {
        self.chars_per_chunk as u32 * self.lane_width
    }

    /// Largest ordinal a lane can carry.
    pub fn max_ordinal(&self) -> u32 {
        lane_mask(self.lane_width)
    }

    /// Mask covering every valid bit of an encoded word.
    pub fn word_mask(&self) -> u64 {
        match self.word_bits() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// Validate a raw integer handed over by a collaborator as an encoded word.
    ///
    /// # Errors
    /// Returns `ChunkError::MalformedWord` for negative values or values with
    /// more than `word_bits()` significant bits.
    pub fn check_word(&self, value: i128) -> Result<u64> {
        if value < 0 || value > self.word_mask() as i128 {
            return Err(ChunkError::MalformedWord {
                value,
                bits: self.word_bits(),
            }
            .into());
        }
        Ok(value as u64)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            chars_per_chunk: DEFAULT_CHARS_PER_CHUNK,
            lane_width: DEFAULT_LANE_WIDTH,
        }
    }
}

/// Mask covering the low `width` bits of a lane.
pub(crate) fn lane_mask(width: u32) -> u32 {
    match width {
        32 => u32::MAX,
        w => (1u32 << w) - 1,
    }
}
