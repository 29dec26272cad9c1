//! Configuration for the lanepack command-line tool.
//!
//! Parses command-line arguments and resolves them into one immutable
//! [`Config`] that is shared by every stage of a run.
//!
//! # Philosophy
//!
//! The tool works with nothing but the text to encode: every other setting
//! has a default that matches the original 4 x 8-bit packing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lanepack_core::config::{DEFAULT_CHARS_PER_CHUNK, DEFAULT_LANE_WIDTH};
use lanepack_core::CodecConfig;

use crate::error::Result;

/// Pack text into interleaved integers and back.
#[derive(Parser, Debug)]
#[command(name = "lanepack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output format for encoded words
    #[arg(long, value_enum, default_value_t = WordFormat::Json, global = true)]
    pub format: WordFormat,

    /// Print codec counters to stderr after the run
    #[arg(long, global = true)]
    pub metrics: bool,

    /// Print the resolved configuration to stderr
    #[arg(long, global = true)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Codec shape. Both sides of a sequence must use the same values.
#[derive(Args, Debug, Clone, Copy)]
pub struct CodecArgs {
    /// Characters packed into one word
    #[arg(long, short = 'k', default_value_t = DEFAULT_CHARS_PER_CHUNK, global = true)]
    pub chars_per_chunk: usize,

    /// Bits per character lane
    #[arg(long, short = 'w', default_value_t = DEFAULT_LANE_WIDTH, global = true)]
    pub lane_width: u32,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode text into a sequence of words.
    Encode(SourceArgs),

    /// Decode a word list (JSON array or hex tokens) back into text.
    Decode(SourceArgs),

    /// Encode then decode, reporting whether the text survived.
    ///
    /// Generates seeded sample text when no input is given.
    Roundtrip(RoundtripArgs),
}

/// Inline input or a file to read it from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Inline input
    pub input: Option<String>,

    /// Read input from a file instead
    #[arg(long = "in", value_name = "PATH", conflicts_with = "input")]
    pub input_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RoundtripArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Length of generated sample text
    #[arg(long, default_value_t = 64)]
    pub sample_len: usize,

    /// Seed for sample text (default: time-based)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// How encoded words are written and read.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFormat {
    /// JSON array of decimal integers
    Json,
    /// Space-separated `0x` hex words, zero-padded to the word width
    Hex,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Validated codec shape
    pub codec: CodecConfig,

    /// Output format for encoded words
    pub format: WordFormat,

    /// Whether to print codec counters
    pub print_metrics: bool,

    /// Whether to print this configuration
    pub print_config: bool,

    /// Log verbosity count
    pub verbose: u8,
}

impl Config {
    /// Resolve parsed arguments, validating the codec shape.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let codec = CodecConfig::new(cli.codec.chars_per_chunk, cli.codec.lane_width)?;
        Ok(Self {
            codec,
            format: cli.format,
            print_metrics: cli.metrics,
            print_config: cli.print_config,
            verbose: cli.verbose,
        })
    }

    /// Default log directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        eprintln!("=== Configuration ===");
        eprintln!("Chars per chunk: {}", self.codec.chars_per_chunk());
        eprintln!("Lane width: {} bits", self.codec.lane_width());
        eprintln!("Word width: {} bits", self.codec.word_bits());
        eprintln!("Max ordinal: {}", self.codec.max_ordinal());
        eprintln!("Format: {:?}", self.format);
        eprintln!("Log level: {}", self.log_level());
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lanepack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["encode", "abcd"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.codec, CodecConfig::default());
        assert_eq!(config.format, WordFormat::Json);
        assert!(!config.print_metrics);
        assert_eq!(config.log_level(), "warn");
        match cli.command {
            Command::Encode(src) => assert_eq!(src.input.as_deref(), Some("abcd")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["decode", "[1]", "-k", "2", "-w", "16", "--format", "hex", "-vv"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.codec, CodecConfig::new(2, 16).unwrap());
        assert_eq!(config.format, WordFormat::Hex);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_invalid_codec_shape() {
        let cli = parse(&["encode", "x", "--lane-width", "40"]);
        assert!(matches!(Config::from_cli(&cli), Err(AppError::Codec(_))));
    }

    #[test]
    fn test_input_file_conflicts_with_inline() {
        let result = Cli::try_parse_from(["lanepack", "encode", "abc", "--in", "file.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_args() {
        let cli = parse(&["roundtrip", "--sample-len", "10", "--seed", "7"]);
        match cli.command {
            Command::Roundtrip(args) => {
                assert_eq!(args.sample_len, 10);
                assert_eq!(args.seed, Some(7));
                assert!(args.source.input.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
