//! Counters describing one codec run.
//!
//! Tracks how much text went in and out and how much padding the chunk
//! layer added or removed. Useful for spotting dropped null characters:
//! if `chars_out < chars_in` after a round trip, some `'\0'` was read as
//! padding.
//!
//! # Thread Safety
//!
//! `CodecMetrics` is a plain per-run struct. The codec itself is stateless,
//! so parallel callers keep their own metrics and merge them with
//! [`CodecMetrics::merge`].

use std::time::{Duration, Instant};

/// Counts and timing for encode/decode calls.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Encoding ===
    /// Characters handed to the encoder
    pub chars_in: u64,

    /// Chunks (and therefore words) produced
    pub chunks_encoded: u64,

    /// Zero lanes inserted to fill short chunks
    pub padding_lanes_added: u64,

    // === Decoding ===
    /// Words handed to the decoder
    pub words_decoded: u64,

    /// Zero lanes removed from the front of decoded chunks
    pub padding_lanes_stripped: u64,

    /// Characters produced by the decoder
    pub chars_out: u64,
}

impl CodecMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            chars_in: 0,
            chunks_encoded: 0,
            padding_lanes_added: 0,
            words_decoded: 0,
            padding_lanes_stripped: 0,
            chars_out: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of encoded lanes that are padding.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn padding_ratio(&self, chars_per_chunk: usize) -> f64 {
        let lanes = self.chunks_encoded * chars_per_chunk as u64;
        if lanes == 0 {
            0.0
        } else {
            self.padding_lanes_added as f64 / lanes as f64
        }
    }

    /// Whether every encoded character came back out.
    ///
    /// Only meaningful after a full round trip.
    pub fn lossless(&self) -> bool {
        self.chars_in == self.chars_out
    }

    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &CodecMetrics) {
        self.chars_in += other.chars_in;
        self.chunks_encoded += other.chunks_encoded;
        self.padding_lanes_added += other.padding_lanes_added;
        self.words_decoded += other.words_decoded;
        self.padding_lanes_stripped += other.padding_lanes_stripped;
        self.chars_out += other.chars_out;
    }

    /// Print a human-readable summary to stderr.
    pub fn print_summary(&self, chars_per_chunk: usize) {
        eprintln!("\n=== Codec Summary ===");
        eprintln!("Duration: {} us", self.duration().as_micros());
        eprintln!();
        eprintln!("=== Encode ===");
        eprintln!("Characters in: {}", self.chars_in);
        eprintln!("Chunks: {}", self.chunks_encoded);
        eprintln!(
            "Padding lanes: {} ({:.1}%)",
            self.padding_lanes_added,
            self.padding_ratio(chars_per_chunk) * 100.0
        );
        eprintln!();
        eprintln!("=== Decode ===");
        eprintln!("Words: {}", self.words_decoded);
        eprintln!("Padding lanes stripped: {}", self.padding_lanes_stripped);
        eprintln!("Characters out: {}", self.chars_out);
        eprintln!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_us={}\n\
             chars_in={}\n\
             chunks_encoded={}\n\
             padding_lanes_added={}\n\
             words_decoded={}\n\
             padding_lanes_stripped={}\n\
             chars_out={}\n",
            self.duration().as_micros(),
            self.chars_in,
            self.chunks_encoded,
            self.padding_lanes_added,
            self.words_decoded,
            self.padding_lanes_stripped,
            self.chars_out,
        )
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}
