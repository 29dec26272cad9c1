//! Chunk interleaving: up to K characters <-> one encoded word.
//!
//! # Layout
//!
//! A chunk holds exactly K lanes. Source characters are stored in reverse
//! order and the front is padded with zero lanes, so lane `K-1` carries the
//! first source character and lane 0 carries the last one (or padding).
//!
//! The word is the transpose of the lanes. Reading the K-by-width bit matrix
//! column by column gives the word MSB-first:
//!
//! ```text
//!            bit 0   bit 1   ...  bit w-1
//! lane 0     a0      a1           a(w-1)
//! lane 1     b0      b1           b(w-1)
//! ...
//! lane K-1   d0      d1           d(w-1)
//!
//! word = a0 b0 .. d0 | a1 b1 .. d1 | ... | a(w-1) b(w-1) .. d(w-1)
//! ```
//!
//! Word bit `p*K + i` (counted from the most significant end) is lane `i`'s
//! bit `p`. No contiguous bit range of the word belongs to one character.
//!
//! # Padding
//!
//! Decoding drops zero lanes from the front until a non-zero lane is found
//! or one lane is left. A genuine `'\0'` in a padding-adjacent lane is
//! therefore indistinguishable from padding and is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::config::CodecConfig;
use crate::error::{ChunkError, Result};
use crate::lane::{from_lane, to_lane, BitLane};

/// One interleaved word of `K * width` significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedWord(u64);

impl EncodedWord {
    /// Wrap a raw value. Width is checked when the word is decoded.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EncodedWord {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EncodedWord> for u64 {
    fn from(word: EncodedWord) -> Self {
        word.0
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Exactly K lanes of equal width, ready to interleave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    lanes: Vec<BitLane>,
}

impl Chunk {
    /// Build a padded, reversed chunk from up to K characters.
    ///
    /// # Errors
    /// - `ChunkError::TooLong` if more than K characters are given
    /// - `LaneError::WidthExceeded` if any character does not fit a lane
    pub fn from_chars(chars: &[char], config: &CodecConfig) -> Result<Self> {
        let k = config.chars_per_chunk();
        if chars.len() > k {
            return Err(ChunkError::TooLong {
                len: chars.len(),
                max: k,
            }
            .into());
        }

        let width = config.lane_width();
        let mut lanes = Vec::with_capacity(k);
        lanes.resize(k - chars.len(), BitLane::zero(width));
        for &ch in chars.iter().rev() {
            lanes.push(to_lane(ch, width)?);
        }

        Ok(Self { lanes })
    }

    /// Lanes in storage order (padding first).
    pub fn lanes(&self) -> &[BitLane] {
        &self.lanes
    }

    /// Number of zero lanes at the front that decoding treats as padding.
    ///
    /// Never counts the final lane.
    pub fn padding_len(&self) -> usize {
        self.lanes
            .iter()
            .take(self.lanes.len().saturating_sub(1))
            .take_while(|lane| lane.is_zero())
            .count()
    }

    /// Drop the padding and restore source character order.
    ///
    /// # Errors
    /// Returns `LaneError::InvalidScalar` if a remaining lane is not a char.
    pub fn into_string(self) -> Result<String> {
        let start = self.padding_len();
        self.lanes[start..].iter().rev().map(|&lane| from_lane(lane)).collect()
    }
}

/// Transpose the lanes of a chunk into one word.
pub fn interleave(chunk: &Chunk) -> EncodedWord {
    let width = chunk.lanes.first().map_or(0, BitLane::width);
    let mut word = 0u64;
    for p in 0..width {
        for lane in &chunk.lanes {
            word = (word << 1) | lane.bit(p) as u64;
        }
    }
    EncodedWord(word)
}

/// Rebuild the K lanes of a word by strided bit selection.
///
/// # Errors
/// Returns `ChunkError::MalformedWord` if the word has more than
/// `K * width` significant bits.
pub fn deinterleave(word: EncodedWord, config: &CodecConfig) -> Result<Chunk> {
    let bits = config.word_bits();
    if word.0 & !config.word_mask() != 0 {
        return Err(ChunkError::MalformedWord {
            value: word.0 as i128,
            bits,
        }
        .into());
    }

    let k = config.chars_per_chunk() as u32;
    let width = config.lane_width();
    let lanes = (0..k)
        .map(|i| {
            let value = (0..width).fold(0u32, |acc, p| {
                let shift = bits - 1 - (p * k + i);
                (acc << 1) | ((word.0 >> shift) & 1) as u32
            });
            BitLane::from_bits(value, width)
        })
        .collect();

    Ok(Chunk { lanes })
}

/// Encode up to K characters into one word.
///
/// # Errors
/// - `ChunkError::TooLong` if `chars.len() > K`
/// - `LaneError::WidthExceeded` if a character does not fit a lane
pub fn encode_chunk(chars: &[char], config: &CodecConfig) -> Result<EncodedWord> {
    let chunk = Chunk::from_chars(chars, config)?;
    let word = interleave(&chunk);
    trace!(chars = chars.len(), word = word.0, "encoded chunk");
    Ok(word)
}

/// Decode one word back into its chunk's characters.
///
/// # Errors
/// - `ChunkError::MalformedWord` if the word is wider than `K * width` bits
/// - `LaneError::InvalidScalar` if a lane is not a valid char
pub fn decode_chunk(word: EncodedWord, config: &CodecConfig) -> Result<String> {
    let chunk = deinterleave(word, config)?;
    trace!(word = word.0, padding = chunk.padding_len(), "decoded chunk");
    chunk.into_string()
}
