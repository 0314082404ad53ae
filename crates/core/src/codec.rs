//! Encoding and decoding against a Huffman tree.
//!
//! Encoding is a straight table lookup per symbol; decoding walks the tree
//! bit by bit, emitting a symbol at each leaf and resetting to the root.
//! Both fail loudly on mismatched inputs: an unknown symbol during encode
//! and a trailing partial code during decode are errors, never silently
//! dropped output.

use crate::bits::Bitstream;
use crate::code::CodeTable;
use crate::error::{CodecError, Result};
use crate::freq::FrequencyTable;
use crate::tree::{HuffNode, HuffmanTree};

/// Encode `text` by concatenating each character's code in input order.
///
/// # Errors
/// `CodecError::OutOfAlphabet` if a character has no entry in `codes`,
/// which indicates the table was built for a different input.
pub fn encode(text: &str, codes: &CodeTable) -> Result<Bitstream> {
    // Every code is at least one bit, so this only ever under-reserves
    let mut bits = Bitstream::with_capacity(text.len());
    for symbol in text.chars() {
        let code = codes
            .get(symbol)
            .ok_or(CodecError::OutOfAlphabet { symbol })?;
        bits.extend(code);
    }
    Ok(bits)
}

/// Decode `bits` by walking `tree` from the root: 0 descends left, 1
/// descends right, each leaf emits its symbol and resets the walk.
///
/// # Errors
/// - `CodecError::TreeMismatch` for non-empty bits against an empty tree
/// - `CodecError::TruncatedStream` if the bits end in the middle of a code
/// - `CodecError::InvalidCode` for a 1 bit under a single-leaf tree, where
///   the only valid code is `0`
pub fn decode(bits: &Bitstream, tree: &HuffmanTree) -> Result<String> {
    let root = match tree.root() {
        Some(root) => root,
        None if bits.is_empty() => return Ok(String::new()),
        None => return Err(CodecError::TreeMismatch.into()),
    };

    // Single-leaf tree: every 0 bit is one occurrence of the symbol
    if let HuffNode::Leaf { symbol, .. } = root {
        let mut out = String::with_capacity(bits.len());
        for (position, bit) in bits.iter().enumerate() {
            if bit {
                return Err(CodecError::InvalidCode { position }.into());
            }
            out.push(*symbol);
        }
        return Ok(out);
    }

    let mut out = String::new();
    let mut cursor = root;
    for bit in bits.iter() {
        cursor = match cursor {
            HuffNode::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // Leaves reset to root below, so the cursor is never a leaf here
            HuffNode::Leaf { .. } => unreachable!("cursor parked on a leaf"),
        };

        if let HuffNode::Leaf { symbol, .. } = cursor {
            out.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(CodecError::TruncatedStream {
            position: bits.len(),
        }
        .into());
    }

    Ok(out)
}

/// A tree and its derived code table, bundled for repeated use.
///
/// Building the pair once and sharing it by reference is the intended way
/// to run many encode/decode calls over the same alphabet.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanCodec {
    /// Build the full pipeline for `text`: frequencies, tree, code table.
    pub fn from_text(text: &str) -> Self {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_text(text));
        let codes = CodeTable::from_tree(&tree);
        Self { tree, codes }
    }

    /// Wrap an existing tree, deriving its code table.
    pub fn from_tree(tree: HuffmanTree) -> Self {
        let codes = CodeTable::from_tree(&tree);
        Self { tree, codes }
    }

    /// Encode `text` with this codec's table.
    pub fn encode(&self, text: &str) -> Result<Bitstream> {
        encode(text, &self.codes)
    }

    /// Decode `bits` with this codec's tree.
    pub fn decode(&self, bits: &Bitstream) -> Result<String> {
        decode(bits, &self.tree)
    }

    /// The decoding tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The derived code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }
}
