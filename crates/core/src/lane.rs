//! Character <-> bit lane conversion.
//!
//! A lane is a character's ordinal stored in exactly `width` bits. Bits are
//! addressed MSB-first: bit 0 is the most significant of the `width` bits,
//! matching the left-to-right reading of the zero-padded binary form.
//!
//! # Example
//! ```
//! use lanepack_core::lane::{from_lane, to_lane};
//!
//! let lane = to_lane('A', 8).unwrap();
//! assert_eq!(lane.to_string(), "01000001");
//! assert!(!lane.bit(0));
//! assert!(lane.bit(1));
//! assert_eq!(from_lane(lane).unwrap(), 'A');
//! ```

use std::fmt;

use crate::config::lane_mask;
use crate::error::{LaneError, Result};

/// One character's ordinal in a fixed number of bits.
///
/// # Invariants
/// - `1 <= width <= 32`
/// - `value < 2^width`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitLane {
    value: u32,
    width: u32,
}

impl BitLane {
    /// The all-zero lane used for chunk padding.
    pub fn zero(width: u32) -> Self {
        Self { value: 0, width }
    }

    /// Build a lane from a raw value, masking off bits above `width`.
    ///
    /// Only used by the de-interleaver, which never produces wider values.
    pub(crate) fn from_bits(value: u32, width: u32) -> Self {
        Self {
            value: value & lane_mask(width),
            width,
        }
    }

    /// Numeric payload of the lane.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of bits in the lane.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether every bit of the lane is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Read bit `p` (MSB-first, `p < width`).
    pub fn bit(&self, p: u32) -> bool {
        debug_assert!(p < self.width);
        (self.value >> (self.width - 1 - p)) & 1 == 1
    }
}

impl fmt::Display for BitLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

/// Convert a character to a lane of `width` bits.
///
/// # Errors
/// Returns `LaneError::WidthExceeded` if the ordinal needs more than `width`
/// bits. The value is never truncated.
pub fn to_lane(ch: char, width: u32) -> Result<BitLane> {
    let ordinal = ch as u32;
    if ordinal > lane_mask(width) {
        return Err(LaneError::WidthExceeded { ch, ordinal, width }.into());
    }
    Ok(BitLane {
        value: ordinal,
        width,
    })
}

/// Convert a lane back to the character with that ordinal.
///
/// # Errors
/// Returns `LaneError::InvalidScalar` when the lane holds a surrogate or a
/// value above U+10FFFF, which only wide lanes can carry.
pub fn from_lane(lane: BitLane) -> Result<char> {
    char::from_u32(lane.value).ok_or_else(|| LaneError::InvalidScalar { value: lane.value }.into())
}
