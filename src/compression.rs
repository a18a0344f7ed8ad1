//! Frame compression utilities.
//!
//! Batch payloads are repetitive JSON and compress well; zlib via
//! `miniz_oxide` keeps the dependency pure Rust. Decompression always runs
//! with an output ceiling so a hostile frame cannot balloon memory.

use miniz_oxide::deflate::compress_to_vec_zlib;
use miniz_oxide::inflate::{decompress_to_vec_zlib_with_limit, TINFLStatus};

/// Compression level handed to miniz_oxide (1 = fastest, 10 = smallest).
const COMPRESSION_LEVEL: u8 = 6;

/// Compress a payload as a zlib stream.
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(data, COMPRESSION_LEVEL)
}

/// Decompress a zlib stream, refusing output larger than `max_len`.
pub fn decompress_with_limit(data: &[u8], max_len: usize) -> Result<Vec<u8>, DecompressError> {
    decompress_to_vec_zlib_with_limit(data, max_len).map_err(|e| match e.status {
        TINFLStatus::HasMoreOutput => DecompressError::TooLarge,
        _ => DecompressError::Malformed,
    })
}

/// Decompression error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// Input is not a valid zlib stream or is truncated.
    Malformed,
    /// Decompressed size would exceed the configured ceiling.
    TooLarge,
}

impl std::fmt::Display for DecompressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "Not a valid zlib stream"),
            Self::TooLarge => write!(f, "Decompressed payload exceeds size limit"),
        }
    }
}

impl std::error::Error for DecompressError {}
