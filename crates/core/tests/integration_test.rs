//! Integration tests for the full codec through the public API.
//!
//! These tests verify end-to-end behavior: text -> chunks -> lanes ->
//! interleaved words -> lanes -> text, with verification that output
//! matches input.

use lanepack_core::{
    chunk::{decode_chunk, encode_chunk},
    error::{ChunkError, Error, LaneError},
    CodecConfig, EncodedSequence, EncodedWord, Scrambler,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random text of non-null characters that fit the configured lane.
fn random_text(rng: &mut ChaCha8Rng, config: &CodecConfig, len: usize) -> String {
    let max = config.max_ordinal().min(0x7F);
    (0..len)
        .map(|_| char::from_u32(rng.gen_range(1..=max)).unwrap())
        .collect()
}

#[test]
fn test_full_roundtrip_default_config() {
    let scrambler = Scrambler::new(CodecConfig::default());
    let input = "The quick brown fox jumps over the lazy dog. 0123456789";

    let words = scrambler.encode(input).expect("encode failed");
    assert_eq!(words.len(), input.len().div_ceil(4));
    for word in &words {
        assert!(word.value() < 1 << 32);
    }

    let decoded = scrambler.decode(words.words()).expect("decode failed");
    assert_eq!(decoded, input);
}

#[test]
fn test_known_vector_regression() {
    let config = CodecConfig::default();
    let word = encode_chunk(&['D', 'C', 'B', 'A'], &config).unwrap();
    assert_eq!(word, EncodedWord::new(251_658_602));
}

#[test]
fn test_scramble_spreads_characters() {
    // Changing one character touches bits across the whole word, not one byte.
    let scrambler = Scrambler::new(CodecConfig::default());
    let a = scrambler.encode("aaaa").unwrap().values()[0];
    let b = scrambler.encode("aaa\u{FF}").unwrap().values()[0];
    let diff = a ^ b;
    assert!(diff.count_ones() > 1);
    assert!(diff > 0xFF, "diff {:#x} stayed inside one byte", diff);
}

#[test]
fn test_random_roundtrip_many_configs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for (k, width) in [(1, 8), (2, 7), (3, 8), (4, 8), (5, 12), (8, 8), (2, 32)] {
        let config = CodecConfig::new(k, width).unwrap();
        let scrambler = Scrambler::new(config);
        for len in [0, 1, k - 1, k, k + 1, 3 * k + 2, 100] {
            let input = random_text(&mut rng, &config, len);
            let words = scrambler.encode(&input).unwrap();
            assert_eq!(words.len(), len.div_ceil(k));
            assert_eq!(
                scrambler.decode(words.words()).unwrap(),
                input,
                "k={} width={} len={}",
                k,
                width,
                len
            );
        }
    }
}

#[test]
fn test_error_taxonomy() {
    let config = CodecConfig::default();

    assert!(matches!(
        encode_chunk(&['a'; 5], &config),
        Err(Error::Chunk(ChunkError::TooLong { len: 5, max: 4 }))
    ));
    assert!(matches!(
        encode_chunk(&['λ'], &config),
        Err(Error::Lane(LaneError::WidthExceeded { width: 8, .. }))
    ));
    assert!(matches!(
        decode_chunk(EncodedWord::new(0x1_0000_0000), &config),
        Err(Error::Chunk(ChunkError::MalformedWord { bits: 32, .. }))
    ));
    assert!(matches!(CodecConfig::new(0, 8), Err(Error::Config(_))));
}

#[test]
fn test_null_ordinal_limitation() {
    let scrambler = Scrambler::new(CodecConfig::default());

    // A null in the last position of a chunk sits next to the padding.
    let words = scrambler.encode("b\0").unwrap();
    assert_eq!(scrambler.decode(words.words()).unwrap(), "b");

    // A null before a non-null character survives.
    let words = scrambler.encode("\0b").unwrap();
    assert_eq!(scrambler.decode(words.words()).unwrap(), "\0b");

    // A full chunk ending in nulls loses them too.
    let words = scrambler.encode("ab\0\0").unwrap();
    assert_eq!(scrambler.decode(words.words()).unwrap(), "ab");

    // An all-null chunk keeps exactly one character.
    let words = scrambler.encode("\0\0\0\0").unwrap();
    assert_eq!(scrambler.decode(words.words()).unwrap(), "\0");
}

#[test]
fn test_parallel_callers_share_config() {
    let scrambler = Scrambler::new(CodecConfig::default());
    let inputs: Vec<String> = (0..8).map(|i| format!("worker {} payload", i)).collect();

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                scope.spawn(move || {
                    let words = scrambler.encode(input).unwrap();
                    scrambler.decode(words.words()).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, inputs);
}

#[test]
fn test_json_transport() {
    let scrambler = Scrambler::new(CodecConfig::default());
    let words = scrambler.encode("hello world").unwrap();

    let json = serde_json::to_string(&words).unwrap();
    let parsed: EncodedSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(scrambler.decode(parsed.words()).unwrap(), "hello world");
}

#[test]
fn test_mismatched_config_does_not_roundtrip() {
    let narrow = Scrambler::new(CodecConfig::new(4, 8).unwrap());
    let wide = Scrambler::new(CodecConfig::new(2, 16).unwrap());
    let words = narrow.encode("abcd").unwrap();
    assert_ne!(wide.decode(words.words()).ok().as_deref(), Some("abcd"));
}
