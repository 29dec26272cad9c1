//! Rendering and parsing of word lists.
//!
//! # Formats
//!
//! ```text
//! json : [251658602, 53477409]
//! hex  : 0x0f00016a 0x03300021
//! ```
//!
//! Parsing accepts either form. A list starting with `[` is read as JSON;
//! anything else is split on whitespace and commas, and each token is read
//! as hex when prefixed with `0x`, decimal otherwise. Every value is checked
//! against the word width before any decoding happens.

use lanepack_core::{CodecConfig, EncodedSequence, EncodedWord};
use serde_json::Value;

use crate::config::WordFormat;
use crate::error::{AppError, Result};

/// Render a sequence in the requested format.
pub fn format_words(words: &EncodedSequence, format: WordFormat, config: &CodecConfig) -> String {
    match format {
        WordFormat::Json => serde_json::to_string(words).unwrap_or_else(|_| "[]".to_string()),
        WordFormat::Hex => {
            let digits = config.word_bits().div_ceil(4) as usize;
            words
                .words()
                .iter()
                .map(|w| format!("{:#0width$x}", w, width = digits + 2))
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

/// Parse a word list, validating every value against `config`.
///
/// # Errors
/// - `AppError::Parse` for syntax errors or non-integer values
/// - `AppError::Codec` (`MalformedWord`) for negative or too-wide values
pub fn parse_words(input: &str, config: &CodecConfig) -> Result<Vec<EncodedWord>> {
    let trimmed = input.trim();
    let values = if trimmed.starts_with('[') {
        parse_json(trimmed)?
    } else {
        trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<_>>>()?
    };

    values
        .into_iter()
        .map(|v| Ok(EncodedWord::new(config.check_word(v)?)))
        .collect()
}

fn parse_json(input: &str) -> Result<Vec<i128>> {
    let items: Vec<Value> =
        serde_json::from_str(input).map_err(|e| AppError::Parse(e.to_string()))?;

    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n
                .as_u64()
                .map(i128::from)
                .or_else(|| n.as_i64().map(i128::from))
                .ok_or_else(|| AppError::Parse(format!("{} is not an integer", n))),
            other => Err(AppError::Parse(format!("{} is not a number", other))),
        })
        .collect()
}

fn parse_token(token: &str) -> Result<i128> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(digits) => i128::from_str_radix(digits, 16),
        None => token.parse::<i128>(),
    };
    parsed.map_err(|e| AppError::Parse(format!("{:?}: {}", token, e)))
}
