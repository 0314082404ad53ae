//! Error types for the huffpress codec.
//!
//! All operations return structured errors rather than panicking.
//! Empty input is not an error anywhere in the pipeline: it degrades to
//! empty outputs. The one exception is decoding non-empty data against an
//! empty tree, which has no valid interpretation.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a failure domain:
/// - Codec: encode/decode failures against a tree or code table
/// - Buffer: malformed packed byte buffers
/// - I/O: file system operations during save/load
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding or decoding failed (e.g., unknown symbol, truncated bits)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Packed buffer is malformed (e.g., bad padding header)
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode/decode errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A symbol in the input has no entry in the code table.
    ///
    /// This indicates the table was built for a different input alphabet;
    /// the symbol is never silently dropped or substituted.
    #[error("symbol {symbol:?} has no entry in the code table")]
    OutOfAlphabet { symbol: char },

    /// The bitstream ended in the middle of a code.
    ///
    /// Decoding must consume complete codes only; a trailing partial code
    /// means the stream was truncated or corrupted.
    #[error("bitstream ends mid-code at bit {position}")]
    TruncatedStream { position: usize },

    /// A bit sequence that cannot occur under the decoding tree.
    ///
    /// Only possible for single-leaf trees, where the sole valid bit is 0.
    #[error("invalid code bit at position {position}")]
    InvalidCode { position: usize },

    /// Non-empty bitstream decoded against an empty tree.
    #[error("non-empty bitstream but the tree defines no codes")]
    TreeMismatch,
}

/// Packed-buffer errors.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Buffer is shorter than the one-byte padding header.
    #[error("packed buffer is empty: missing padding header")]
    Empty,

    /// Declared padding count is outside the valid range 0-7.
    #[error("declared padding {padding} is outside the valid range 0-7")]
    InvalidPadding { padding: u8 },

    /// Declared padding strips more bits than the buffer carries.
    #[error("declared padding {padding} exceeds the {available} available data bits")]
    PaddingExceedsData { padding: usize, available: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
