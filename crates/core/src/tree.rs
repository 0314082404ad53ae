//! Huffman tree construction and diagnostics.
//!
//! The tree is built by the classic greedy merge: seed a min-heap with one
//! leaf per distinct symbol, then repeatedly merge the two lowest-frequency
//! nodes until one root remains. Leaves with rare symbols end up deep, and
//! frequent symbols end up shallow, which is what makes the derived codes
//! optimal.
//!
//! # Determinism
//!
//! Heap ordering alone leaves tie-breaks between equal-frequency nodes
//! unspecified, which would make the tree shape depend on input order. We
//! key the heap on (frequency, creation sequence) and seed the leaves in
//! ascending symbol order, so equal frequencies resolve to the node created
//! first and the same frequency table always produces the same tree.
//!
//! # Ownership
//!
//! Each internal node exclusively owns its two children; nothing is mutated
//! after construction. Callers share the tree by reference across any number
//! of decode calls.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::freq::FrequencyTable;

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    /// Terminal node holding one input symbol.
    Leaf { symbol: char, freq: u64 },
    /// Merge node; `freq` is the sum of both children's frequencies.
    Internal {
        freq: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Frequency of this node (leaf count, or subtree total).
    pub fn freq(&self) -> u64 {
        match self {
            HuffNode::Leaf { freq, .. } => *freq,
            HuffNode::Internal { freq, .. } => *freq,
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// Heap entry: min-orders nodes by (frequency, creation sequence).
///
/// `BinaryHeap` is a max-heap, so the comparisons are reversed.
struct Pending {
    freq: u64,
    seq: u64,
    node: Box<HuffNode>,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An immutable Huffman tree; empty when built from an empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Box<HuffNode>>,
}

impl HuffmanTree {
    /// Build a tree from a frequency table by greedy minimum-merge.
    ///
    /// The first node extracted becomes the left child, the second the
    /// right. An empty table yields an empty tree; a single-symbol table
    /// yields a tree that is one leaf (the code generator special-cases it).
    ///
    /// O(k log k) for k distinct symbols.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        // Seed leaves in ascending symbol order so ties are deterministic
        let mut symbols: Vec<(char, u64)> = freqs.iter().collect();
        symbols.sort_by_key(|&(symbol, _)| symbol);

        let mut seq = 0u64;
        let mut heap: BinaryHeap<Pending> = symbols
            .into_iter()
            .map(|(symbol, freq)| {
                let entry = Pending {
                    freq,
                    seq,
                    node: Box::new(HuffNode::Leaf { symbol, freq }),
                };
                seq += 1;
                entry
            })
            .collect();

        while heap.len() > 1 {
            let first = heap.pop().expect("heap has at least two entries");
            let second = heap.pop().expect("heap has at least two entries");

            let freq = first.freq + second.freq;
            heap.push(Pending {
                freq,
                seq,
                node: Box::new(HuffNode::Internal {
                    freq,
                    left: first.node,
                    right: second.node,
                }),
            });
            seq += 1;
        }

        Self {
            root: heap.pop().map(|entry| entry.node),
        }
    }

    /// Root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_deref()
    }

    /// True if built from an empty input.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Render an indented diagnostic listing of the tree.
    ///
    /// Leaf lines show the symbol and its frequency (`'a' (5)`), internal
    /// lines show `*` and the aggregate frequency. Presentation-only; no
    /// format stability is promised.
    ///
    /// Traversal uses an explicit stack: a skewed tree over k symbols can
    /// reach depth k-1, which recursion would not survive for large k.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let root = match self.root() {
            Some(root) => root,
            None => return out,
        };

        // (node, line prefix, drawn as a left branch?)
        let mut stack: Vec<(&HuffNode, String, bool)> = vec![(root, String::new(), true)];

        while let Some((node, prefix, is_left)) = stack.pop() {
            let branch = if is_left { "├── " } else { "└── " };
            let label = match node {
                HuffNode::Leaf { symbol, freq } => format!("{:?} ({})", symbol, freq),
                HuffNode::Internal { freq, .. } => format!("* ({})", freq),
            };
            out.push_str(&prefix);
            out.push_str(branch);
            out.push_str(&label);
            out.push('\n');

            if let HuffNode::Internal { left, right, .. } = node {
                let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
                // Right pushed first so the left child renders first
                stack.push((right.as_ref(), child_prefix.clone(), false));
                stack.push((left.as_ref(), child_prefix, true));
            }
        }

        out
    }
}
