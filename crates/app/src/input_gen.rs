//! Sample text generation for round-trip runs.
//!
//! When no text is given, we generate a sample with characters that exercise
//! the codec: mostly printable text, some control characters, and the top of
//! the lane's ordinal range.
//!
//! # Design
//!
//! Generated text never contains `'\0'`, so a correct round trip must
//! reproduce it exactly. Characters are drawn only from ordinals the
//! configured lane can hold.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample text whose ordinals all fit in `1..=max_ordinal`.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: number of characters to generate
/// - `max_ordinal`: largest ordinal the lane can carry
pub fn generate_sample_text(seed: u64, len: usize, max_ordinal: u32) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let printable_top = max_ordinal.min(0x7E);
    let mut text = String::with_capacity(len);
    let mut produced = 0;

    while produced < len {
        let kind: u8 = rng.gen_range(0..10);

        let ordinal = match kind {
            // 60% lowercase words and spaces
            0..=5 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz ";
                alphabet[rng.gen_range(0..alphabet.len())] as u32
            }

            // 20% any printable ASCII that fits
            6..=7 => rng.gen_range(1..=printable_top),

            // 20% anywhere in the lane's range
            _ => rng.gen_range(1..=max_ordinal),
        };

        if ordinal > max_ordinal {
            continue;
        }
        if let Some(ch) = char::from_u32(ordinal) {
            text.push(ch);
            produced += 1;
        }
    }

    text
}
