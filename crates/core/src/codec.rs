//! String-level codec: text <-> ordered sequence of encoded words.
//!
//! Text is split into consecutive chunks of K characters (the last chunk may
//! be shorter); each chunk becomes one word. Decoding concatenates the
//! decoded chunks in order.
//!
//! # Example
//! ```
//! use lanepack_core::{CodecConfig, Scrambler};
//!
//! let scrambler = Scrambler::new(CodecConfig::default());
//! let words = scrambler.encode("hello!").unwrap();
//! assert_eq!(words.len(), 2);
//! assert_eq!(scrambler.decode(words.words()).unwrap(), "hello!");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chunk::{self, deinterleave, EncodedWord};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::metrics::CodecMetrics;

/// Ordered words, one per chunk of the source text.
///
/// Serializes as a plain array of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedSequence(Vec<EncodedWord>);

impl EncodedSequence {
    /// Words in source order.
    pub fn words(&self) -> &[EncodedWord] {
        &self.0
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw integer values in source order.
    pub fn values(&self) -> Vec<u64> {
        self.0.iter().map(|w| w.value()).collect()
    }

    pub fn into_inner(self) -> Vec<EncodedWord> {
        self.0
    }
}

impl From<Vec<EncodedWord>> for EncodedSequence {
    fn from(words: Vec<EncodedWord>) -> Self {
        Self(words)
    }
}

impl FromIterator<EncodedWord> for EncodedSequence {
    fn from_iter<I: IntoIterator<Item = EncodedWord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EncodedSequence {
    type Item = &'a EncodedWord;
    type IntoIter = std::slice::Iter<'a, EncodedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Stateless string codec bound to one configuration.
///
/// `Copy`, so the same value can be handed to any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scrambler {
    config: CodecConfig,
}

impl Scrambler {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode up to K characters. See [`chunk::encode_chunk`].
    pub fn encode_chunk(&self, chars: &[char]) -> Result<EncodedWord> {
        chunk::encode_chunk(chars, &self.config)
    }

    /// Decode one word. See [`chunk::decode_chunk`].
    pub fn decode_chunk(&self, word: EncodedWord) -> Result<String> {
        chunk::decode_chunk(word, &self.config)
    }

    /// Encode a whole string, K characters per word.
    ///
    /// # Errors
    /// Returns `LaneError::WidthExceeded` for the first character that does
    /// not fit a lane. No partial output is returned.
    pub fn encode(&self, text: &str) -> Result<EncodedSequence> {
        self.encode_with_metrics(text, &mut CodecMetrics::new())
    }

    /// Like [`encode`](Self::encode), recording counters into `metrics`.
    pub fn encode_with_metrics(
        &self,
        text: &str,
        metrics: &mut CodecMetrics,
    ) -> Result<EncodedSequence> {
        let k = self.config.chars_per_chunk();
        let chars: Vec<char> = text.chars().collect();

        let words = chars
            .chunks(k)
            .map(|piece| self.encode_chunk(piece))
            .collect::<Result<Vec<_>>>()?;

        let padding = (words.len() * k).saturating_sub(chars.len());
        metrics.chars_in += chars.len() as u64;
        metrics.chunks_encoded += words.len() as u64;
        metrics.padding_lanes_added += padding as u64;

        debug!(chars = chars.len(), words = words.len(), padding, "encoded text");
        Ok(EncodedSequence(words))
    }

    /// Decode words in order and concatenate the chunks.
    ///
    /// # Errors
    /// Returns `ChunkError::MalformedWord` for the first word wider than
    /// `K * width` bits. No partial output is returned.
    pub fn decode(&self, words: &[EncodedWord]) -> Result<String> {
        self.decode_with_metrics(words, &mut CodecMetrics::new())
    }

    /// Like [`decode`](Self::decode), recording counters into `metrics`.
    pub fn decode_with_metrics(
        &self,
        words: &[EncodedWord],
        metrics: &mut CodecMetrics,
    ) -> Result<String> {
        let mut text = String::new();
        let mut stripped = 0usize;
        let mut chars_out = 0usize;

        for &word in words {
            let chunk = deinterleave(word, &self.config)?;
            stripped += chunk.padding_len();
            let piece = chunk.into_string()?;
            chars_out += piece.chars().count();
            text.push_str(&piece);
        }

        metrics.words_decoded += words.len() as u64;
        metrics.padding_lanes_stripped += stripped as u64;
        metrics.chars_out += chars_out as u64;

        debug!(words = words.len(), chars = chars_out, stripped, "decoded text");
        Ok(text)
    }

    /// Decode raw integers from a collaborator, validating each first.
    ///
    /// # Errors
    /// Returns `ChunkError::MalformedWord` for any negative or too-wide
    /// value, before anything is decoded.
    pub fn decode_values(&self, values: &[i128]) -> Result<String> {
        let words = values
            .iter()
            .map(|&v| self.config.check_word(v).map(EncodedWord::new))
            .collect::<Result<Vec<_>>>()?;
        self.decode(&words)
    }
}
