//! huffpress-core: Huffman coding over text
//!
//! This library implements the full Huffman pipeline:
//! - Counts symbol frequencies in an input text
//! - Builds an optimal prefix-code tree by greedy minimum-merge
//! - Derives a code table and encodes text into an exact-length bitstream
//! - Packs the bitstream into a byte format with a padding header
//!
//! # Architecture
//!
//! The pipeline is a chain of small modules:
//! - `bits`: exact-length MSB-first bit buffer
//! - `freq`: symbol frequency counting
//! - `tree`: tree construction and diagnostic rendering
//! - `code`: code table derivation by traversal
//! - `codec`: encode/decode against a tree
//! - `pack`: packed byte format plus file save/load
//! - `stats`: compression size measurement
//!
//! Data flows forward through `freq -> tree -> code -> codec -> pack` and
//! back through `pack -> codec`. The tree is immutable after construction
//! and shared by reference across decode calls.
//!
//! # Design Principles
//!
//! - **No panics**: all fallible operations return structured errors
//! - **No silent repair**: unknown symbols and truncated streams are
//!   errors, never substituted or dropped
//! - **Deterministic**: equal-frequency merges resolve by a documented
//!   tie-break, so the same input always yields the same tree
//!
//! # Example
//! ```
//! use huffpress_core::HuffmanCodec;
//! use huffpress_core::pack::{pack, unpack};
//!
//! let codec = HuffmanCodec::from_text("abracadabra");
//! let bits = codec.encode("abracadabra").unwrap();
//! let buffer = pack(&bits);
//!
//! let restored = unpack(&buffer).unwrap();
//! assert_eq!(codec.decode(&restored).unwrap(), "abracadabra");
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod pack;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use bits::Bitstream;
pub use code::CodeTable;
pub use codec::HuffmanCodec;
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use stats::CompressionStats;
pub use tree::{HuffNode, HuffmanTree};
