//! lanepack: command-line front end for the interleaving codec.
//!
//! Accepts text (or a word list), calls the codec, and prints the result on
//! stdout. Logs, configuration dumps and metrics go to stderr.

mod config;
mod error;
mod input_gen;
mod render;

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use lanepack_core::metrics::CodecMetrics;
use lanepack_core::Scrambler;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, Config, RoundtripArgs, SourceArgs};
use crate::error::{AppError, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    if config.print_config {
        config.print();
    }

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over `-v`.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(command: &Command, config: &Config) -> Result<()> {
    let scrambler = Scrambler::new(config.codec);
    let mut metrics = CodecMetrics::new();

    match command {
        Command::Encode(source) => {
            let text = read_source(source)?;
            let words = scrambler.encode_with_metrics(&text, &mut metrics)?;
            info!(words = words.len(), "encode complete");
            println!("{}", render::format_words(&words, config.format, &config.codec));
        }
        Command::Decode(source) => {
            let raw = read_source(source)?;
            let words = render::parse_words(&raw, &config.codec)?;
            let text = scrambler.decode_with_metrics(&words, &mut metrics)?;
            info!(chars = text.chars().count(), "decode complete");
            println!("{}", text);
        }
        Command::Roundtrip(args) => roundtrip(&scrambler, args, config, &mut metrics)?,
    }

    metrics.complete();
    if config.print_metrics {
        metrics.print_summary(config.codec.chars_per_chunk());
    }
    Ok(())
}

fn roundtrip(
    scrambler: &Scrambler,
    args: &RoundtripArgs,
    config: &Config,
    metrics: &mut CodecMetrics,
) -> Result<()> {
    let text = match read_source(&args.source) {
        Ok(text) => text,
        Err(AppError::NoInput) => {
            let seed = args.seed.unwrap_or_else(time_seed);
            info!(seed, len = args.sample_len, "generating sample text");
            input_gen::generate_sample_text(seed, args.sample_len, config.codec.max_ordinal())
        }
        Err(e) => return Err(e),
    };

    let words = scrambler.encode_with_metrics(&text, metrics)?;
    let decoded = scrambler.decode_with_metrics(words.words(), metrics)?;

    println!("{}", render::format_words(&words, config.format, &config.codec));
    if decoded == text {
        println!("✓ Round trip preserved {} characters", text.chars().count());
    } else {
        println!(
            "✗ Round trip changed the text: {} characters in, {} out",
            metrics.chars_in, metrics.chars_out
        );
    }
    Ok(())
}

fn read_source(source: &SourceArgs) -> Result<String> {
    match (&source.input, &source.input_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => read_file(path),
        (None, None) => Err(AppError::NoInput),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
