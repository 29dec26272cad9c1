//! Error types for the lanepack codec.
//!
//! Every failure is a data-validity problem: the codec never retries and
//! never substitutes a value for input it cannot represent.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Lane: a single character cannot be mapped to or from a bit lane
/// - Chunk: a chunk or encoded word is outside the valid domain
/// - Config: the (chars per chunk, lane width) pair is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Character <-> lane conversion failed
    #[error("lane error: {0}")]
    Lane(#[from] LaneError),

    /// Chunk interleaving or de-interleaving failed
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// Configuration rejected at construction time
    #[error("configuration error: {0}")]
    Config(String),
}

/// Lane-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// Character ordinal needs more bits than the lane holds
    #[error("character {ch:?} (ordinal {ordinal}) does not fit in {width} bits")]
    WidthExceeded { ch: char, ordinal: u32, width: u32 },

    /// Decoded lane value is not a Unicode scalar value
    #[error("lane value {value:#x} is not a valid character")]
    InvalidScalar { value: u32 },
}

/// Chunk-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// More characters than fit in one chunk
    #[error("chunk of {len} characters exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },

    /// Value is negative or wider than an encoded word
    #[error("value {value} is not a valid {bits}-bit encoded word")]
    MalformedWord { value: i128, bits: u32 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_exceeded() {
        let err: Error = LaneError::WidthExceeded {
            ch: 'é',
            ordinal: 233,
            width: 7,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "lane error: character 'é' (ordinal 233) does not fit in 7 bits"
        );
    }

    #[test]
    fn test_display_chunk_too_long() {
        let err: Error = ChunkError::TooLong { len: 5, max: 4 }.into();
        assert_eq!(
            err.to_string(),
            "chunk error: chunk of 5 characters exceeds the maximum of 4"
        );
    }

    #[test]
    fn test_display_malformed_word() {
        let err = ChunkError::MalformedWord { value: -3, bits: 32 };
        assert_eq!(err.to_string(), "value -3 is not a valid 32-bit encoded word");
    }

    #[test]
    fn test_from_conversions() {
        let err: Error = LaneError::InvalidScalar { value: 0xD800 }.into();
        assert!(matches!(err, Error::Lane(LaneError::InvalidScalar { value: 0xD800 })));
    }
}
